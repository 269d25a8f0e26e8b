use crate::domain::models::product::RecipeItem;
use crate::error::AppError;

/// Amount of one ingredient an order takes out of stock.
#[derive(Debug, Clone, PartialEq)]
pub struct StockDraw {
    pub ingredient_id: i64,
    pub ingredient_name: String,
    pub amount: f64,
}

/// Slack for float products such as `0.1 * 3` when checking stock coverage.
pub const STOCK_EPSILON: f64 = 1e-9;

pub fn order_total(unit_price: f64, quantity: i64) -> Result<f64, AppError> {
    // Rounded to cents.
    let total = (unit_price * quantity as f64 * 100.0).round() / 100.0;
    if !total.is_finite() {
        return Err(AppError::Validation("Valor total do pedido inválido.".into()));
    }
    Ok(total)
}

/// Works out what `quantity` units of a product take from stock, failing on the
/// first ingredient that is disabled or cannot cover its share.
pub fn plan_consumption(recipe: &[RecipeItem], quantity: i64) -> Result<Vec<StockDraw>, AppError> {
    if quantity < 1 {
        return Err(AppError::Validation("A quantidade deve ser pelo menos 1.".into()));
    }

    recipe
        .iter()
        .map(|line| {
            let amount = line.required_quantity * quantity as f64;
            if !line.ingredient_active || amount - line.stock_quantity > STOCK_EPSILON {
                return Err(AppError::Validation(format!(
                    "Estoque insuficiente para o ingrediente {}.",
                    line.ingredient_name
                )));
            }
            Ok(StockDraw {
                ingredient_id: line.ingredient_id,
                ingredient_name: line.ingredient_name.clone(),
                amount,
            })
        })
        .collect()
}
