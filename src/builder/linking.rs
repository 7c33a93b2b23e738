//! Small channeling helpers shared by the indicator and objective modules.
//!
//! `cp_sat`'s binding (as used throughout `model_geneds.rs`) has no
//! `OnlyEnforceIf`; booleans are linked to conditions with plain
//! `add_le`/`add_ge`/`add_eq` over `LinearExpr`, the same idiom this module
//! generalizes into two reusable shapes.

use cp_sat::builder::{BoolVar, CpModelBuilder, LinearExpr};

/// Creates `y` such that `y == 1` iff at least one of `terms` is 1.
/// Standard channeling: `y <= sum(terms)` and `sum(terms) <= |terms| * y`.
pub fn at_least_one_indicator(model: &mut CpModelBuilder, terms: &[BoolVar]) -> BoolVar {
    let y = model.new_bool_var();
    if terms.is_empty() {
        model.add_eq(y.clone(), LinearExpr::from(0));
        return y;
    }
    let sum: LinearExpr = terms.iter().cloned().map(|v| (1i64, v)).collect();
    model.add_le(y.clone(), sum.clone());
    let scaled_y: LinearExpr = vec![(terms.len() as i64, y.clone())].into_iter().collect();
    model.add_le(sum, scaled_y);
    y
}

/// Creates `z` such that `z == 1` iff both `a` and `b` (each a 0/1-valued
/// `LinearExpr`) are 1: `z <= a`, `z <= b`, `z >= a + b - 1`.
pub fn and_indicator(model: &mut CpModelBuilder, a: LinearExpr, b: LinearExpr) -> BoolVar {
    let z = model.new_bool_var();
    model.add_le(z.clone(), a.clone());
    model.add_le(z.clone(), b.clone());
    model.add_ge(z.clone(), a + b - LinearExpr::from(1));
    z
}
