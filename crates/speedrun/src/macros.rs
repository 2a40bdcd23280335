//! Macros used by this crate.

#![allow(unused_macros, unused_macro_rules)]

/// Enables items conditionally based on whether the `serde` feature is enabled.
macro_rules! cfg_serde {
	(
		$($item:item)*
	) => {
		$(
			#[cfg(feature = "serde")]
			#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
			$item
		)*
	};
}

/// Creates a new string-backed "ID" type.
///
/// speedrun.com IDs are short base36-ish strings (e.g. `"j1npme6p"`). They are
/// never inspected, only compared and passed back to the API.
macro_rules! make_id {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident;
	) => {
		$(#[$meta])*
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
		#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
		#[cfg_attr(feature = "serde", serde(transparent))]
		$vis struct $name(Box<str>);

		impl $name
		{
			/// Creates a new ID.
			pub fn new(id: impl Into<Box<str>>) -> Self
			{
				Self(id.into())
			}

			/// Returns the ID as a string slice.
			pub fn as_str(&self) -> &str
			{
				&self.0
			}
		}

		impl ::std::fmt::Debug for $name
		{
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result
			{
				f.debug_tuple(::std::stringify!($name))
					.field(&&*self.0)
					.finish()
			}
		}

		impl ::std::fmt::Display for $name
		{
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result
			{
				f.pad(&self.0)
			}
		}

		impl AsRef<str> for $name
		{
			fn as_ref(&self) -> &str
			{
				&self.0
			}
		}

		impl From<&str> for $name
		{
			fn from(id: &str) -> Self
			{
				Self(Box::from(id))
			}
		}

		impl From<String> for $name
		{
			fn from(id: String) -> Self
			{
				Self(id.into_boxed_str())
			}
		}

		impl ::std::str::FromStr for $name
		{
			type Err = ::std::convert::Infallible;

			fn from_str(id: &str) -> Result<Self, Self::Err>
			{
				Ok(Self::from(id))
			}
		}
	};
}
