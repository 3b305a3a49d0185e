use crate::common::*;

#[doc = "Raised when a submitted clothing type is not one of the fixed category labels"]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid clothing type selected: '{0}'")]
pub struct InvalidCategoryError(pub String);

#[doc = r#"
    Closed set of clothing categories the mock trends are generated for.

    Declaration order is the enumeration order used for every tie-break
    (aggregation row order, top-N ranking ties), so `Ord` is derived from it.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    TShirtTop,
    Trouser,
    Pullover,
    Dress,
    Coat,
    Sandal,
    Shirt,
    Sneaker,
    Bag,
    AnkleBoot,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::TShirtTop,
        Category::Trouser,
        Category::Pullover,
        Category::Dress,
        Category::Coat,
        Category::Sandal,
        Category::Shirt,
        Category::Sneaker,
        Category::Bag,
        Category::AnkleBoot,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::TShirtTop => "T-shirt/top",
            Category::Trouser => "Trouser",
            Category::Pullover => "Pullover",
            Category::Dress => "Dress",
            Category::Coat => "Coat",
            Category::Sandal => "Sandal",
            Category::Shirt => "Shirt",
            Category::Sneaker => "Sneaker",
            Category::Bag => "Bag",
            Category::AnkleBoot => "Ankle boot",
        }
    }

    #[doc = "Label with every character outside [A-Za-z0-9-_] replaced by '_', safe as a file name"]
    pub fn file_slug(&self) -> String {
        self.label()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = InvalidCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.label() == s)
            .ok_or_else(|| InvalidCategoryError(s.to_string()))
    }
}
