//! Response envelopes.
//!
//! Every speedrun.com response wraps its payload in a `data` field. Collection
//! endpoints additionally carry a `pagination` object whose `links` point to
//! the neighbouring pages.

use serde::Deserialize;
use url::Url;

/// A single-resource response.
#[derive(Debug, Deserialize)]
pub(super) struct Envelope<T>
{
	pub(super) data: T,
}

/// One page of a paginated collection.
#[derive(Debug, Deserialize)]
pub(super) struct Page<T>
{
	pub(super) data: Vec<T>,

	#[serde(default)]
	pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct Pagination
{
	#[serde(default)]
	links: Vec<Link>,
}

#[derive(Debug, Deserialize)]
struct Link
{
	rel: Box<str>,
	uri: Box<str>,
}

impl<T> Page<T>
{
	/// Returns the URL of the next page, if there is one.
	pub(super) fn next_url(&self) -> Result<Option<Url>, url::ParseError>
	{
		self.pagination
			.iter()
			.flat_map(|pagination| &pagination.links)
			.find(|link| &*link.rel == "next")
			.map(|link| Url::parse(&link.uri))
			.transpose()
	}
}
