use serde::{Deserialize, Serialize};

/// `{asset}_{pay_type}_{trade_type}_{pay_method}_{limit}` over normalized parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(pub String);
