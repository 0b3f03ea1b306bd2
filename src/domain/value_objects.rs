use crate::domain::entities::Feedback;
use crate::util::now_timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::LazyLock;
use typed_builder::TypedBuilder;
use uuid::Uuid;

const ID_LEN: usize = 12;
const COUNTER_MASK: u32 = 0x00ff_ffff;

static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(|| {
    let mut bytes = [0u8; 5];
    bytes.copy_from_slice(&Uuid::new_v4().as_bytes()[..5]);
    bytes
});

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Store identifier of a feedback record.
///
/// Twelve bytes: creation time in seconds (4), a per-process random value (5)
/// and a wrapping counter (3). Ids generated by one process sort by creation
/// order, so the hex form compares the same way as the bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FeedbackId([u8; ID_LEN]);

impl FeedbackId {
    pub fn generate() -> Self {
        let mut bytes = [0u8; ID_LEN];
        // Four bytes of seconds, as in an ObjectId; saturates instead of wrapping.
        let seconds = u32::try_from(now_timestamp().max(0)).unwrap_or(u32::MAX);
        let counter = COUNTER.fetch_add(1, Ordering::SeqCst) & COUNTER_MASK;

        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(PROCESS_UNIQUE.as_slice());
        bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);

        Self(bytes)
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFeedbackIdError(String);

impl fmt::Display for ParseFeedbackIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "invalid feedback id: {:?}", self.0)
    }
}

impl std::error::Error for ParseFeedbackIdError {}

impl FromStr for FeedbackId {
    type Err = ParseFeedbackIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ID_LEN * 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseFeedbackIdError(s.to_string()));
        }

        let mut bytes = [0u8; ID_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
                .map_err(|_| ParseFeedbackIdError(s.to_string()))?;
        }

        Ok(Self(bytes))
    }
}

impl TryFrom<String> for FeedbackId {
    type Error = ParseFeedbackIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FeedbackId> for String {
    fn from(value: FeedbackId) -> Self {
        value.to_string()
    }
}

/// Equality criteria applied to a listing. Absent criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, TypedBuilder)]
pub struct FeedbackFilter {
    #[builder(default)]
    customer: Option<String>,
    #[builder(default)]
    rating: Option<i32>,
    #[builder(default)]
    product: Option<String>,
}

impl FeedbackFilter {
    pub fn customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }

    pub fn rating(&self) -> Option<i32> {
        self.rating
    }

    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.customer.is_none() && self.rating.is_none() && self.product.is_none()
    }

    pub fn matches(&self, feedback: &Feedback) -> bool {
        self.customer
            .as_deref()
            .is_none_or(|customer| feedback.customer() == Some(customer))
            && self.rating.is_none_or(|rating| feedback.rating() == rating)
            && self
                .product
                .as_deref()
                .is_none_or(|product| feedback.product() == product)
    }
}
