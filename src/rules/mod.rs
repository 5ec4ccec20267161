//! Canfield move legality.
//!
//! `Game` asks the validator before every mutation. The validator never
//! mutates and never interprets indices beyond bounds checks; the engine
//! owns the 1-based public numbering.

pub mod validator;

pub use validator::{
    can_foundation_to_tableau, can_reserve_to_foundation, can_reserve_to_tableau,
    can_stock_to_waste, can_tableau_to_foundation, can_tableau_to_tableau,
    can_waste_to_foundation, can_waste_to_tableau, foundation_accepts, foundation_for,
    is_recycle, tableau_accepts,
};
