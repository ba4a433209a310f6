//! Atom feed document shapes
//!
//! Typed quick-xml structs for the activity feed. Unknown elements and
//! attributes in the document are ignored.

use crate::dedup::Identified;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An Atom person construct
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// An Atom link element
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedLink {
    #[serde(rename = "@rel", default)]
    pub rel: String,
    #[serde(rename = "@href", default)]
    pub href: String,
}

/// An Atom content element
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(rename = "@type", default)]
    pub content_type: String,
    #[serde(rename = "$text", default)]
    pub value: String,
}

/// One activity record from the feed
///
/// The `id` is the feed entry ID, stable and unique within a query; it is
/// what cross-window deduplication keys on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "entry")]
pub struct Activity {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: Option<FeedLink>,
    pub id: String,
    pub updated: DateTime<Utc>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub content: Option<Content>,
}

impl Identified for Activity {
    type Ident = String;

    fn ident(&self) -> String {
        self.id.clone()
    }
}

/// A whole activity feed document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "feed")]
pub struct Feed {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(rename = "link", default)]
    pub links: Vec<FeedLink>,
    #[serde(rename = "entry", default)]
    pub entries: Vec<Activity>,
}

/// Parse an Atom feed document
pub fn parse_feed(xml: &str) -> Result<Feed> {
    Ok(quick_xml::de::from_str(xml)?)
}
