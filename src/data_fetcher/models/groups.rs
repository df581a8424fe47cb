/// A named group of participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poule {
    pub name: String,
    pub members: Vec<String>,
}

/// A community favourite and its vote count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub label: String,
    pub votes: u32,
}
