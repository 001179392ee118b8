//! Coupon Application Example
//!
//! Validates two coupons from a small in-memory catalogue against a sample
//! order and prints the discounted totals.

use anyhow::Result;
use jiff::{Timestamp, Zoned};
use rust_decimal::Decimal;

use butik::coupons::DiscountType;
use butik_app::domain::coupons::{
    StorageError,
    records::{CouponId, CouponRecord},
    repository::CouponsRepository,
    service::CouponValidationService,
};

struct InMemoryCoupons {
    coupons: Vec<CouponRecord>,
}

impl CouponsRepository for InMemoryCoupons {
    fn find_by_code(&self, code: &str) -> Result<Option<CouponRecord>, StorageError> {
        Ok(self
            .coupons
            .iter()
            .find(|coupon| coupon.code == code)
            .cloned())
    }
}

fn main() -> Result<()> {
    let now = Timestamp::now();
    let next_month = Zoned::now().date().saturating_add(jiff::Span::new().months(1));

    let catalogue = InMemoryCoupons {
        coupons: vec![
            CouponRecord {
                id: CouponId::new(),
                code: "WINTER25".to_string(),
                discount_type: DiscountType::Percentage,
                discount_value: Decimal::from(25),
                minimum_order_value: Decimal::from(100),
                expiry_date: Some(next_month),
                usage_limit: 100,
                times_used: 10,
                is_active: true,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            },
            CouponRecord {
                id: CouponId::new(),
                code: "FLAT50".to_string(),
                discount_type: DiscountType::FixedAmount,
                discount_value: Decimal::from(50),
                minimum_order_value: Decimal::ZERO,
                expiry_date: Some(next_month),
                usage_limit: 500,
                times_used: 499,
                is_active: true,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            },
        ],
    };

    let service = CouponValidationService::new(catalogue);
    let subtotal = Decimal::new(24_950, 2);

    for code in ["WINTER25", "FLAT50", "SUMMER10"] {
        match service.validate_coupon(code, subtotal) {
            Ok(coupon) => {
                let discount = service.calculate_discount(&coupon, subtotal);

                println!(
                    "{code}: -{discount} on {subtotal} => {} ({} uses left)",
                    subtotal - discount,
                    coupon.remaining_uses(),
                );
            }
            Err(reason) => println!("{code}: rejected ({reason})"),
        }
    }

    Ok(())
}
