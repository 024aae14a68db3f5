pub mod discount;
pub mod nomination;
pub mod payment;
pub mod price_table;

pub use discount::{DiscountSchedule, DiscountTier};
pub use nomination::NominationCategory;
pub use payment::{AccountingLine, MethodAmounts, PaymentComponent, PaymentMethod, PaymentStatus};
pub use price_table::{EventPriceTable, PriceRow};
