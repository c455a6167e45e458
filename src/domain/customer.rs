#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i32,
    pub name: String,
}

/// Customer fields supplied by a client; identity is assigned by storage.
#[derive(Debug, Clone)]
pub struct CustomerInput {
    pub name: String,
}
