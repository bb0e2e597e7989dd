//! Personal details shared by students and teachers, plus the row-id newtype
//! macro used by every stored entity.

/// Define a store-assigned integer identity newtype.
macro_rules! define_row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw identity value.
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Return the raw identity value.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use define_row_id;

/// Name and birth date of a person as supplied by a client.
///
/// `date_of_birth` is kept as the raw text the client sent. The store casts it
/// to a timestamp and rejects anything it cannot parse, including an empty
/// string, so no date parsing happens in the domain.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonDetails {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
}

impl PersonDetails {
    /// Build details from borrowed parts.
    ///
    /// # Examples
    /// ```
    /// use registrar::domain::PersonDetails;
    ///
    /// let person = PersonDetails::new("Ada", "Lovelace", "12/10/1815");
    /// assert_eq!(person.first_name, "Ada");
    /// ```
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth: date_of_birth.into(),
        }
    }
}
