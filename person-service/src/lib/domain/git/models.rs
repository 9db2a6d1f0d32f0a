/// Public repository entry fetched from GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRepo {
    pub name: String,
    pub full_name: String,
}
