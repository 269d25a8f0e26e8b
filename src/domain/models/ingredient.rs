use serde::Serialize;
use sqlx::FromRow;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Gram,
    Milligram,
    Kilogram,
    Millilitre,
    Litre,
    Piece,
}

impl Unit {
    pub const ALL: [Unit; 6] = [
        Unit::Gram,
        Unit::Milligram,
        Unit::Kilogram,
        Unit::Millilitre,
        Unit::Litre,
        Unit::Piece,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Milligram => "mg",
            Unit::Kilogram => "kg",
            Unit::Millilitre => "ml",
            Unit::Litre => "l",
            Unit::Piece => "un",
        }
    }

    pub fn allowed_list() -> String {
        Self::ALL.iter().map(|u| u.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl FromStr for Unit {
    type Err = String;

    /// Accepts surrounding whitespace and any casing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|u| u.as_str() == normalized)
            .ok_or_else(|| format!("Unidade inválida. Use apenas: {}.", Self::allowed_list()))
    }
}

#[derive(Debug, Serialize, FromRow, Clone)]
pub struct Ingredient {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "unidade")]
    pub unit: String,
    #[serde(rename = "quantidade_estoque")]
    pub stock_quantity: f64,
    #[serde(rename = "status")]
    pub active: bool,
}

pub struct NewIngredient {
    pub name: String,
    pub unit: Unit,
    pub stock_quantity: f64,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parsing_normalizes() {
        assert_eq!(" KG ".parse::<Unit>().unwrap(), Unit::Kilogram);
        assert_eq!("un".parse::<Unit>().unwrap(), Unit::Piece);
        assert_eq!("Ml".parse::<Unit>().unwrap().as_str(), "ml");
    }

    #[test]
    fn test_unit_rejects_unknown() {
        let err = "colher".parse::<Unit>().unwrap_err();
        assert!(err.contains("g, mg, kg, ml, l, un"));
        assert!("".parse::<Unit>().is_err());
    }
}
