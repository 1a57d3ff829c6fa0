use std::fmt;

use chrono::NaiveDateTime;

use super::{Catalog, ReceiptError, RequestLine};
use crate::promotion;

/// 판매세율(6%).
pub const SALES_TAX_RATE: f64 = 0.06;

/// 영수증 한 줄.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    /// 할인 적용 후 단가 [$]
    pub unit_price: f64,
}

impl ReceiptLine {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// 완성된 영수증.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub store_name: String,
    pub survey_url: String,
    pub lines: Vec<ReceiptLine>,
    pub discount_rate: f64,
    pub item_count: u64,
    pub subtotal: f64,
    pub sales_tax: f64,
    pub total: f64,
    pub issued_at: NaiveDateTime,
}

/// 주문 목록에 단가 할인과 판매세를 적용해 영수증을 만든다.
///
/// 상품 번호가 목록에 없으면 [`ReceiptError::UnknownProduct`]를 반환한다.
pub fn build_receipt(
    store_name: &str,
    survey_url: &str,
    catalog: &Catalog,
    requests: &[RequestLine],
    now: NaiveDateTime,
) -> Result<Receipt, ReceiptError> {
    let discount_rate = promotion::receipt_discount_rate(now);
    let mut lines = Vec::with_capacity(requests.len());
    let mut item_count = 0u64;
    let mut subtotal = 0.0;

    for request in requests {
        let product = catalog
            .get(&request.product_id)
            .ok_or_else(|| ReceiptError::UnknownProduct(request.product_id.clone()))?;
        let line = ReceiptLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            quantity: request.quantity,
            unit_price: product.price * (1.0 - discount_rate),
        };
        item_count += u64::from(line.quantity);
        subtotal += line.line_total();
        lines.push(line);
    }

    let sales_tax = subtotal * SALES_TAX_RATE;
    let total = subtotal + sales_tax;
    tracing::info!(items = item_count, subtotal, total, discount_rate, "receipt built");

    Ok(Receipt {
        store_name: store_name.to_string(),
        survey_url: survey_url.to_string(),
        lines,
        discount_rate,
        item_count,
        subtotal,
        sales_tax,
        total,
        issued_at: now,
    })
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.store_name)?;
        writeln!(f)?;
        writeln!(f, "Requested Items")?;
        for line in &self.lines {
            writeln!(f, "{}: {} @ ${:.2}", line.name, line.quantity, line.unit_price)?;
        }
        writeln!(f)?;
        if self.discount_rate > 0.0 {
            writeln!(f, "Weekday discount: {:.0}%", self.discount_rate * 100.0)?;
        }
        writeln!(f, "Number of items: {}", self.item_count)?;
        writeln!(f, "Subtotal: ${:.2}", self.subtotal)?;
        writeln!(f, "Sales Tax: ${:.2}", self.sales_tax)?;
        writeln!(f, "Total: ${:.2}", self.total)?;
        writeln!(f)?;
        writeln!(f, "Thank you for shopping at {}", self.store_name)?;
        writeln!(f, "{}", self.issued_at.format("%a %b %d %H:%M:%S %Y"))?;
        writeln!(f)?;
        writeln!(
            f,
            "Please visit our website to complete a survey about your shopping experience!"
        )?;
        writeln!(f, "Your feedback is valuable to us.")?;
        write!(f, "Survey URL: {}", self.survey_url)
    }
}
