use std::fmt::Display;

pub const ADD_PREFIX: &str = "+ ";
pub const REMOVE_PREFIX: &str = "- ";
pub const EQUAL_PREFIX: &str = "  ";

/// The fate of a single element when turning sequence A into sequence B.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Equal { value: T },
    Add { value: T },
    Remove { value: T },
}

impl<T> Edit<T> {
    pub fn value(&self) -> &T {
        match self {
            Edit::Equal { value } | Edit::Add { value } | Edit::Remove { value } => value,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, Edit::Equal { .. })
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Edit::Equal { .. } => EQUAL_PREFIX,
            Edit::Add { .. } => ADD_PREFIX,
            Edit::Remove { .. } => REMOVE_PREFIX,
        }
    }

    /// Swaps `Add` and `Remove`, describing the same element for the B -> A direction.
    pub fn inverse(self) -> Self {
        match self {
            Edit::Equal { value } => Edit::Equal { value },
            Edit::Add { value } => Edit::Remove { value },
            Edit::Remove { value } => Edit::Add { value },
        }
    }
}

impl<T> Edit<T>
where
    T: Clone + Into<String>,
{
    pub fn as_string(&self) -> String {
        format!("{}{}", self.prefix(), self.value().clone().into())
    }
}

impl<T> Display for Edit<T>
where
    T: Clone + Into<String>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
