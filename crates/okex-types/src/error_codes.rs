//! OKEx v1 error code catalog
//!
//! The exchange reports failures as an `error_code` field next to (or instead
//! of) the success payload. Codes fall into four groups:
//!
//! - `10000`-`10216`: spot trading
//! - `1002`-`1218`: account and balance operations
//! - `405`, `20001`-`20049`: contract trading
//! - two literal string keys for HTTP-level conditions (403, timeouts)
//!
//! The catalog is built once per process and never mutated.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Error domain a catalog entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Spot trading errors (`100xx`-`102xx`)
    Spot,
    /// Account, balance and verification errors (`1xxx`)
    Account,
    /// HTTP-level conditions reported as literal strings
    Http,
    /// Contract (futures) trading errors (`200xx`, `405`)
    Contract,
}

/// A single catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorEntry {
    /// Code as it appears in the catalog
    pub key: &'static str,
    /// Error domain
    pub category: ErrorCategory,
    /// Human-readable description
    pub description: &'static str,
}

const CATALOG: &[(&str, ErrorCategory, &str)] = &[
    ("10000", ErrorCategory::Spot, "Required field, can not be null"),
    ("10001", ErrorCategory::Spot, "Request frequency too high to exceed the limit allowed"),
    ("10002", ErrorCategory::Spot, "System error"),
    ("10004", ErrorCategory::Spot, "Request failed"),
    ("10005", ErrorCategory::Spot, "'SecretKey' does not exist"),
    ("10006", ErrorCategory::Spot, "'Api_key' does not exist"),
    ("10007", ErrorCategory::Spot, "Signature does not match"),
    ("10008", ErrorCategory::Spot, "Illegal parameter"),
    ("10009", ErrorCategory::Spot, "Order does not exist"),
    ("10010", ErrorCategory::Spot, "Insufficient funds"),
    ("10011", ErrorCategory::Spot, "Amount too low"),
    ("10012", ErrorCategory::Spot, "Only btc_usd ltc_usd supported"),
    ("10013", ErrorCategory::Spot, "Only support https request"),
    ("10014", ErrorCategory::Spot, "Order price must be between 0 and 1,000,000"),
    ("10015", ErrorCategory::Spot, "Order price differs from current market price too much"),
    ("10016", ErrorCategory::Spot, "Insufficient coins balance"),
    ("10017", ErrorCategory::Spot, "API authorization error"),
    ("10018", ErrorCategory::Spot, "borrow amount less than lower limit [usd:100,btc:0.1,ltc:1]"),
    ("10019", ErrorCategory::Spot, "loan agreement not checked"),
    ("10020", ErrorCategory::Spot, "rate cannot exceed 1%"),
    ("10021", ErrorCategory::Spot, "rate cannot less than 0.01%"),
    ("10023", ErrorCategory::Spot, "fail to get latest ticker"),
    ("10024", ErrorCategory::Spot, "balance not sufficient"),
    ("10025", ErrorCategory::Spot, "quota is full, cannot borrow temporarily"),
    ("10026", ErrorCategory::Spot, "Loan (including reserved loan) and margin cannot be withdrawn"),
    ("10027", ErrorCategory::Spot, "Cannot withdraw within 24 hrs of authentication information modification"),
    ("10028", ErrorCategory::Spot, "Withdrawal amount exceeds daily limit"),
    ("10029", ErrorCategory::Spot, "Account has unpaid loan, please cancel/pay off the loan before withdraw"),
    ("10031", ErrorCategory::Spot, "Deposits can only be withdrawn after 6 confirmations"),
    ("10032", ErrorCategory::Spot, "Please enabled phone/google authenticator"),
    ("10033", ErrorCategory::Spot, "Fee higher than maximum network transaction fee"),
    ("10034", ErrorCategory::Spot, "Fee lower than minimum network transaction fee"),
    ("10035", ErrorCategory::Spot, "Insufficient BTC/LTC"),
    ("10036", ErrorCategory::Spot, "Withdrawal amount too low"),
    ("10037", ErrorCategory::Spot, "Trade password not set"),
    ("10040", ErrorCategory::Spot, "Withdrawal cancellation fails"),
    ("10041", ErrorCategory::Spot, "Withdrawal address not exist or approved"),
    ("10042", ErrorCategory::Spot, "Admin password error"),
    ("10043", ErrorCategory::Spot, "Account equity error, withdrawal failure"),
    ("10044", ErrorCategory::Spot, "fail to cancel borrowing order"),
    ("10047", ErrorCategory::Spot, "this function is disabled for sub-account"),
    ("10048", ErrorCategory::Spot, "withdrawal information does not exist"),
    ("10049", ErrorCategory::Spot, "User can not have more than 50 unfilled small orders (amount<0.15BTC)"),
    ("10050", ErrorCategory::Spot, "can't cancel more than once"),
    ("10051", ErrorCategory::Spot, "order completed transaction"),
    ("10052", ErrorCategory::Spot, "not allowed to withdraw"),
    ("10064", ErrorCategory::Spot, "after a USD deposit, that portion of assets will not be withdrawable for the next 48 hours"),
    ("10100", ErrorCategory::Spot, "User account frozen"),
    ("10101", ErrorCategory::Spot, "order type is wrong"),
    ("10102", ErrorCategory::Spot, "incorrect ID"),
    ("10103", ErrorCategory::Spot, "the private otc order's key incorrect"),
    ("10216", ErrorCategory::Spot, "Non-available API"),
    ("1002", ErrorCategory::Account, "The transaction amount exceed the balance"),
    ("1003", ErrorCategory::Account, "The transaction amount is less than the minimum requirement"),
    ("1004", ErrorCategory::Account, "The transaction amount is less than 0"),
    ("1007", ErrorCategory::Account, "No trading market information"),
    ("1008", ErrorCategory::Account, "No latest market information"),
    ("1009", ErrorCategory::Account, "No order"),
    ("1010", ErrorCategory::Account, "Different user of the cancelled order and the original order"),
    ("1011", ErrorCategory::Account, "No documented user"),
    ("1013", ErrorCategory::Account, "No order type"),
    ("1014", ErrorCategory::Account, "No login"),
    ("1015", ErrorCategory::Account, "No market depth information"),
    ("1017", ErrorCategory::Account, "Date error"),
    ("1018", ErrorCategory::Account, "Order failed"),
    ("1019", ErrorCategory::Account, "Undo order failed"),
    ("1024", ErrorCategory::Account, "Currency does not exist"),
    ("1025", ErrorCategory::Account, "No chart type"),
    ("1026", ErrorCategory::Account, "No base currency quantity"),
    ("1027", ErrorCategory::Account, "Incorrect parameter may exceeded limits"),
    ("1028", ErrorCategory::Account, "Reserved decimal failed"),
    ("1029", ErrorCategory::Account, "Preparing"),
    ("1030", ErrorCategory::Account, "Account has margin and futures, transactions can not be processed"),
    ("1031", ErrorCategory::Account, "Insufficient Transferring Balance"),
    ("1032", ErrorCategory::Account, "Transferring Not Allowed"),
    ("1035", ErrorCategory::Account, "Password incorrect"),
    ("1036", ErrorCategory::Account, "Google Verification code Invalid"),
    ("1037", ErrorCategory::Account, "Google Verification code incorrect"),
    ("1038", ErrorCategory::Account, "Google Verification replicated"),
    ("1039", ErrorCategory::Account, "Message Verification Input exceed the limit"),
    ("1040", ErrorCategory::Account, "Message Verification invalid"),
    ("1041", ErrorCategory::Account, "Message Verification incorrect"),
    ("1042", ErrorCategory::Account, "Wrong Google Verification Input exceed the limit"),
    ("1043", ErrorCategory::Account, "Login password cannot be same as the trading password"),
    ("1044", ErrorCategory::Account, "Old password incorrect"),
    ("1045", ErrorCategory::Account, "2nd Verification Needed"),
    ("1046", ErrorCategory::Account, "Please input old password"),
    ("1048", ErrorCategory::Account, "Account Blocked"),
    ("1201", ErrorCategory::Account, "Account Deleted at 00: 00"),
    ("1202", ErrorCategory::Account, "Account Not Exist"),
    ("1203", ErrorCategory::Account, "Insufficient Balance"),
    ("1204", ErrorCategory::Account, "Invalid currency"),
    ("1205", ErrorCategory::Account, "Invalid Account"),
    ("1206", ErrorCategory::Account, "Cash Withdrawal Blocked"),
    ("1207", ErrorCategory::Account, "Transfer Not Support"),
    ("1208", ErrorCategory::Account, "No designated account"),
    ("1209", ErrorCategory::Account, "Invalid api"),
    ("1216", ErrorCategory::Account, "Market order temporarily suspended. Please send limit order"),
    ("1217", ErrorCategory::Account, "Order was sent at ±5% of the current market price. Please resend"),
    ("1218", ErrorCategory::Account, "Place order failed. Please try again later"),
    ("HTTP ERROR CODE 403", ErrorCategory::Http, "Too many requests, IP is shielded"),
    ("Request Timed Out", ErrorCategory::Http, "Too many requests, IP is shielded"),
    ("405", ErrorCategory::Contract, "method not allowed"),
    ("20001", ErrorCategory::Contract, "User does not exist"),
    ("20002", ErrorCategory::Contract, "Account frozen"),
    ("20003", ErrorCategory::Contract, "Account frozen due to liquidation"),
    ("20004", ErrorCategory::Contract, "Contract account frozen"),
    ("20005", ErrorCategory::Contract, "User contract account does not exist"),
    ("20006", ErrorCategory::Contract, "Required field missing"),
    ("20007", ErrorCategory::Contract, "Illegal parameter"),
    ("20008", ErrorCategory::Contract, "Contract account balance is too low"),
    ("20009", ErrorCategory::Contract, "Contract status error"),
    ("20010", ErrorCategory::Contract, "Risk rate ratio does not exist"),
    ("20011", ErrorCategory::Contract, "Risk rate lower than 90%/80% before opening BTC position with 10x/20x leverage. or risk rate lower than 80%/60% before opening LTC position with 10x/20x leverage"),
    ("20012", ErrorCategory::Contract, "Risk rate lower than 90%/80% after opening BTC position with 10x/20x leverage. or risk rate lower than 80%/60% after opening LTC position with 10x/20x leverage"),
    ("20013", ErrorCategory::Contract, "Temporally no counter party price"),
    ("20014", ErrorCategory::Contract, "System error"),
    ("20015", ErrorCategory::Contract, "Order does not exist"),
    ("20016", ErrorCategory::Contract, "Close amount bigger than your open positions"),
    ("20017", ErrorCategory::Contract, "Not authorized/illegal operation"),
    ("20018", ErrorCategory::Contract, "Order price cannot be more than 103% or less than 97% of the previous minute price"),
    ("20019", ErrorCategory::Contract, "IP restricted from accessing the resource"),
    ("20020", ErrorCategory::Contract, "SecretKey does not exist"),
    ("20021", ErrorCategory::Contract, "Index information does not exist"),
    ("20022", ErrorCategory::Contract, "Wrong API interface (Cross margin mode shall call cross margin API, fixed margin mode shall call fixed margin API)"),
    ("20023", ErrorCategory::Contract, "Account in fixed-margin mode"),
    ("20024", ErrorCategory::Contract, "Signature does not match"),
    ("20025", ErrorCategory::Contract, "Leverage rate error"),
    ("20026", ErrorCategory::Contract, "API Permission Error"),
    ("20027", ErrorCategory::Contract, "no transaction record"),
    ("20028", ErrorCategory::Contract, "no such contract"),
    ("20029", ErrorCategory::Contract, "Amount is large than available funds"),
    ("20030", ErrorCategory::Contract, "Account still has debts"),
    ("20038", ErrorCategory::Contract, "Due to regulation, this function is not available in the country/region your currently reside in"),
    ("20049", ErrorCategory::Contract, "Request frequency too high"),
];

fn catalog() -> &'static HashMap<&'static str, ErrorEntry> {
    static INDEX: OnceLock<HashMap<&'static str, ErrorEntry>> = OnceLock::new();
    INDEX.get_or_init(|| {
        CATALOG
            .iter()
            .map(|&(key, category, description)| {
                (
                    key,
                    ErrorEntry {
                        key,
                        category,
                        description,
                    },
                )
            })
            .collect()
    })
}

/// Look up a catalog entry by its key
pub fn lookup(key: &str) -> Option<&'static ErrorEntry> {
    catalog().get(key)
}

/// Number of entries in the catalog
pub fn catalog_len() -> usize {
    CATALOG.len()
}

/// Raw `error_code` value as found in a response body
///
/// The exchange sends integers. The HTTP-level keys only ever arrive as
/// strings, so both forms are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorCodeValue {
    /// Numeric code
    Number(i64),
    /// Literal string code
    Text(String),
}

impl ErrorCodeValue {
    /// The catalog key for this value
    pub fn key(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.trim().to_string(),
        }
    }

    /// Returns true for the integer zero, which the exchange uses for success
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Number(0))
    }
}

impl fmt::Display for ErrorCodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// An exchange-reported error resolved against the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{description} (code {key})")]
pub struct OkexApiError {
    /// Catalog key the code resolved to
    pub key: &'static str,
    /// Numeric code, when the exchange sent one
    pub code: Option<i64>,
    /// Error domain
    pub category: ErrorCategory,
    /// Human-readable description
    pub description: &'static str,
}

impl OkexApiError {
    /// Resolve a numeric code
    ///
    /// Returns `None` when the code has no catalog entry, which includes the
    /// success code `0`.
    pub fn from_code(code: i64) -> Option<Self> {
        Self::resolve(&ErrorCodeValue::Number(code))
    }

    /// Resolve a raw `error_code` value
    pub fn resolve(value: &ErrorCodeValue) -> Option<Self> {
        let entry = lookup(&value.key())?;
        let code = match value {
            ErrorCodeValue::Number(n) => Some(*n),
            ErrorCodeValue::Text(_) => None,
        };

        Some(Self {
            key: entry.key,
            code,
            category: entry.category,
            description: entry.description,
        })
    }

    /// Check if this error signals request throttling
    pub fn is_rate_limit(&self) -> bool {
        matches!(
            self.key,
            "10001" | "20049" | "HTTP ERROR CODE 403" | "Request Timed Out"
        )
    }

    /// Check if this error is about keys, signatures or API permissions
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.key,
            "10005" | "10006" | "10007" | "10017" | "1209" | "20019" | "20020" | "20024" | "20026"
        )
    }

    /// Check if this error came from the contract trading domain
    pub fn is_contract_error(&self) -> bool {
        self.category == ErrorCategory::Contract
    }
}
