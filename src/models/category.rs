use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Category {
    Underweight,
    NormalWeight,
    Overweight,
    Obesity,
}

impl Category {
    /// Human-readable label, also the value stored in the DB.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::NormalWeight => "Normal weight",
            Category::Overweight => "Overweight",
            Category::Obesity => "Obesity",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.label()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Underweight" => Some(Category::Underweight),
            "Normal weight" => Some(Category::NormalWeight),
            "Overweight" => Some(Category::Overweight),
            "Obesity" => Some(Category::Obesity),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
