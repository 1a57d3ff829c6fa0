use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

use super::ReceiptError;

/// 상품 목록의 한 행. 이후 열은 무시한다.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// 단가 [$]
    pub price: f64,
}

/// 상품 번호로 조회하는 상품 목록.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<String, Product>,
}

impl Catalog {
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }
}

/// 주문서의 한 행.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestLine {
    pub product_id: String,
    pub quantity: u32,
}

fn open_error(path: &Path, e: io::Error) -> ReceiptError {
    match e.kind() {
        io::ErrorKind::NotFound => ReceiptError::MissingFile(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => ReceiptError::PermissionDenied(path.to_path_buf()),
        _ => ReceiptError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    }
}

fn open_csv(path: &Path) -> Result<csv::Reader<File>, ReceiptError> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file))
}

fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// products.csv(`상품번호, 이름, 단가, ...`)를 읽는다. 첫 행은 헤더로 건너뛴다.
pub fn read_catalog(path: impl AsRef<Path>) -> Result<Catalog, ReceiptError> {
    let path = path.as_ref();
    let mut reader = open_csv(path)?;
    let mut products = HashMap::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let invalid = |reason: String| ReceiptError::InvalidRow {
            path: path.to_path_buf(),
            line: line_of(&record),
            reason,
        };
        if record.len() < 3 {
            return Err(invalid(format!("열이 3개 미만입니다 ({}개)", record.len())));
        }
        let price: f64 = record[2]
            .parse()
            .map_err(|_| invalid(format!("단가를 숫자로 읽을 수 없음: {}", &record[2])))?;
        let product = Product {
            id: record[0].to_string(),
            name: record[1].to_string(),
            price,
        };
        products.insert(product.id.clone(), product);
    }
    tracing::info!(path = %path.display(), count = products.len(), "product catalog loaded");
    Ok(Catalog { products })
}

/// request.csv(`상품번호, 수량`)를 읽는다. 열이 2개 미만인 행은 건너뛴다.
pub fn read_requests(path: impl AsRef<Path>) -> Result<Vec<RequestLine>, ReceiptError> {
    let path = path.as_ref();
    let mut reader = open_csv(path)?;
    let mut lines = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < 2 || record.iter().all(str::is_empty) {
            continue;
        }
        let quantity: u32 = record[1].parse().map_err(|_| ReceiptError::InvalidRow {
            path: path.to_path_buf(),
            line: line_of(&record),
            reason: format!("수량을 정수로 읽을 수 없음: {}", &record[1]),
        })?;
        lines.push(RequestLine {
            product_id: record[0].to_string(),
            quantity,
        });
    }
    tracing::info!(path = %path.display(), count = lines.len(), "request list loaded");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_error_kinds_map_to_receipt_errors() {
        let path = Path::new("products.csv");
        let denied = open_error(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(denied, ReceiptError::PermissionDenied(ref p) if p == path));

        let missing = open_error(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(missing, ReceiptError::MissingFile(_)));

        let other = open_error(path, io::Error::from(io::ErrorKind::InvalidData));
        match other {
            ReceiptError::Io { path: p, source } => {
                assert_eq!(p.as_path(), path);
                assert_eq!(source.kind(), io::ErrorKind::InvalidData);
            }
            e => panic!("unexpected error: {e:?}"),
        }
    }
}
