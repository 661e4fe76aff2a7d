mod dashboard;
pub use dashboard::Dashboard;

mod title;
pub use title::TitleSlide;
