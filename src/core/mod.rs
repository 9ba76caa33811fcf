pub mod agent;
pub mod oembed;
pub mod path;
pub mod probe;
pub mod render;
pub mod unfurl;

pub use crate::domain::model::{ArticlePath, Dimensions, Story, StoryCard};
pub use crate::domain::ports::{ConfigProvider, RangeFetcher, StoryClient};
pub use crate::utils::error::Result;
