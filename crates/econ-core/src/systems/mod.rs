//! Turn-Pipeline Systems
//!
//! One system per phase of the turn, chained in strict order by the
//! engine's schedule. Ordering is load-bearing: each phase reads state the
//! previous phases may have mutated within the same turn.

pub mod benefits;
pub mod consumption;
pub mod hiring;
pub mod interest;
pub mod production;
pub mod salaries;
pub mod taxation;
pub mod turn;
pub mod utilities;

pub use benefits::unemployment_benefits;
pub use consumption::consumption;
pub use hiring::hiring_and_lending;
pub use interest::collect_interest;
pub use production::production;
pub use salaries::pay_salaries;
pub use taxation::taxation;
pub use turn::finalize_turn;
pub use utilities::utility_billing;
