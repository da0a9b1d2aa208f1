pub mod data_persistance;
pub mod page_fetcher;
pub mod section_scraper;
pub mod table_extractor;

pub use data_persistance::*;
pub use page_fetcher::*;
pub use section_scraper::*;
pub use table_extractor::*;
