//! Static vocabularies accepted by the P2P endpoint.
//!
//! Tables are ordered slices rather than maps so that listings and error messages
//! keep a stable, documented order.

use serde_json::{Map, Value};

pub const CRYPTO_ASSETS: [&str; 10] = ["USDT", "BTC", "ETH", "BNB", "BUSD", "ADA", "DOT", "MATIC", "SHIB", "DOGE"];

pub const TRADE_TYPES: [&str; 2] = ["BUY", "SELL"];

/// Payment method code accepted in `pay_method` meaning "no restriction".
pub const ALL_PAY_METHODS: &str = "ALL";

pub type PaymentMethods = &'static [(&'static str, &'static str)];

/// Fiat currency code to (payment method code, upstream display name).
pub static PAYMENT_METHODS: &[(&str, PaymentMethods)] = &[
    ("BHD", &[("BANK", "BANK"), ("BBK", "Bank of Bahrain and Kuwait B.S.C."), ("DENIZBANK", "DenizBank A.Ş. Bahrain"), ("AIC", "The Arab Investment Company S.A.A."), ("CASHU", "CashU"), ("MONEYGRAM", "MoneyGram")]),
    ("AED", &[("BANK", "BANK"), ("CIB", "CIB"), ("CASHU", "CashU"), ("MONEYGRAM", "MoneyGram")]),
    ("SAR", &[("BANK", "BANK"), ("CASHU", "CashU"), ("MONEYGRAM", "MoneyGram")]),
    ("EGP", &[("BANK", "BANK"), ("CASHU", "CashU"), ("MONEYGRAM", "MoneyGram")]),
    ("JOD", &[("BANK", "BANK"), ("CASHU", "CashU"), ("MONEYGRAM", "MoneyGram")]),
    ("KWD", &[("BANK", "BANK"), ("CASHU", "CashU"), ("MONEYGRAM", "MoneyGram")]),
    ("LBP", &[("BANK", "BANK"), ("CASHU", "CashU"), ("MONEYGRAM", "MoneyGram")]),
    ("MAD", &[("BANK", "BANK"), ("CASHU", "CashU"), ("MONEYGRAM", "MoneyGram")]),
    ("OMR", &[("BANK", "BANK"), ("CASHU", "CashU"), ("MONEYGRAM", "MoneyGram")]),
    ("QAR", &[("BANK", "BANK"), ("CASHU", "CashU"), ("MONEYGRAM", "MoneyGram")]),
    ("TND", &[("BANK", "BANK"), ("CASHU", "CashU"), ("MONEYGRAM", "MoneyGram")]),
    ("BDT", &[("BKASH", "bKash"), ("NAGAD", "Nagad"), ("ROCKET", "Rocket"), ("UPAY", "Upay"), ("BANK", "BANK")]),
    ("INR", &[("UPI", "UPI"), ("IMPS", "IMPS"), ("PAYTM", "Paytm"), ("PHONEPE", "PhonePe"), ("GPAY", "GooglePay"), ("BANK", "BANK")]),
    ("PKR", &[("EASYPAISA", "EasyPaisa"), ("JAZZCASH", "JazzCash"), ("BANK", "BANK")]),
    ("USD", &[("WISE", "Wise"), ("PAYPAL", "Paypal"), ("BANK", "BANK"), ("ZELLE", "Zelle")]),
    ("EUR", &[("SEPA", "SEPA"), ("WISE", "Wise"), ("BANK", "BANK")]),
    ("GBP", &[("FASTERPAYMENTS", "FasterPayments"), ("WISE", "Wise"), ("BANK", "BANK")]),
    ("TRY", &[("BANK", "BANK"), ("PAPARA", "Papara"), ("ZIRAAT", "ZiraatBank")]),
    ("RUB", &[("BANK", "BANK"), ("TINKOFF", "TinkoffBank"), ("SBERBANK", "Sberbank")]),
    ("NGN", &[("BANK", "BANK"), ("OPAY", "Opay"), ("PALMPAY", "PalmPay")]),
    ("KES", &[("MPESA", "M-Pesa"), ("BANK", "BANK")]),
    ("ZAR", &[("BANK", "BANK"), ("CAPITEC", "Capitec"), ("FNB", "FNB")]),
    ("PHP", &[("GCASH", "GCash"), ("PAYMAYA", "PayMaya"), ("BANK", "BANK")]),
    ("THB", &[("BANK", "BANK"), ("PROMPTPAY", "PromptPay")]),
    ("MYR", &[("BANK", "BANK"), ("TOUCHNGO", "TouchNGo")]),
    ("SGD", &[("BANK", "BANK"), ("PAYNOW", "PayNow")]),
    ("HKD", &[("BANK", "BANK"), ("FPS", "FPS")]),
    ("JPY", &[("BANK", "BANK")]),
    ("KRW", &[("BANK", "BANK")]),
    ("CNY", &[("BANK", "BANK"), ("ALIPAY", "Alipay"), ("WECHAT", "WeChatPay")]),
    ("VND", &[("BANK", "BANK"), ("MOMO", "MoMo"), ("ZALOPAY", "ZaloPay")]),
    ("IDR", &[("BANK", "BANK"), ("GOPAY", "GoPay"), ("OVO", "OVO"), ("DANA", "DANA")]),
    ("BRL", &[("BANK", "BANK"), ("PIX", "Pix")]),
    ("ARS", &[("BANK", "BANK"), ("MERCADOPAGO", "MercadoPago")]),
    ("CLP", &[("BANK", "BANK")]),
    ("COP", &[("BANK", "BANK"), ("NEQUI", "Nequi"), ("DAVIPLATA", "DaviPlata")]),
    ("MXN", &[("BANK", "BANK"), ("SPEI", "SPEI")]),
    ("PEN", &[("BANK", "BANK"), ("YAPE", "Yape"), ("PLIN", "Plin")]),
    ("GHS", &[("BANK", "BANK"), ("MTN", "MTN Mobile Money"), ("VODAFONE", "Vodafone Cash")]),
    ("UGX", &[("BANK", "BANK"), ("AIRTEL", "Airtel Money"), ("MTN", "MTN Mobile Money")]),
    ("TZS", &[("BANK", "BANK"), ("MPESA", "M-Pesa"), ("TIGO", "Tigo Pesa")]),
    ("LRD", &[("BANK", "BANK"), ("MOOV", "Moov Money")]),
    ("SLL", &[("BANK", "BANK"), ("ORANGE", "Orange Money")]),
    ("GMD", &[("BANK", "BANK"), ("QMONEY", "QMoney")]),
    ("MRO", &[("BANK", "BANK")]),
    ("CVE", &[("BANK", "BANK")]),
];

pub fn is_supported_asset(asset: &str) -> bool
{
    CRYPTO_ASSETS.contains(&asset)
}

pub fn payment_methods_for(fiat: &str) -> Option<PaymentMethods>
{
    PAYMENT_METHODS.iter().find(|(code, _)| *code == fiat).map(|(_, methods)| *methods)
}

/// Display name the upstream expects for `method` under `fiat`.
pub fn payment_method_name(fiat: &str, method: &str) -> Option<&'static str>
{
    payment_methods_for(fiat)?.iter().find(|(code, _)| *code == method).map(|(_, name)| *name)
}

pub fn fiat_currencies() -> Vec<&'static str>
{
    PAYMENT_METHODS.iter().map(|(code, _)| *code).collect()
}

pub fn payment_methods_json() -> Value
{
    let mut currencies = Map::new();
    for (fiat, methods) in PAYMENT_METHODS {
        let mut entries = Map::new();
        for (code, name) in *methods {
            entries.insert(code.to_string(), Value::String(name.to_string()));
        }
        currencies.insert(fiat.to_string(), Value::Object(entries));
    }
    Value::Object(currencies)
}
