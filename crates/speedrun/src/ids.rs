//! Identifiers for the various speedrun.com resources.

make_id! {
	/// The ID of a game.
	pub struct GameId;
}

make_id! {
	/// The ID of a category within a game.
	pub struct CategoryId;
}

make_id! {
	/// The ID of a variable (a category sub-configuration such as platform or
	/// difficulty).
	pub struct VariableId;
}

make_id! {
	/// The ID of one of the values a [`VariableId`] can take.
	pub struct ValueId;
}

make_id! {
	/// The ID of a single run.
	pub struct RunId;
}

make_id! {
	/// The ID of a registered speedrun.com user.
	pub struct UserId;
}
