use crate::domain::value_objects::FeedbackId;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct Feedback {
    id: FeedbackId,
    rating: i32,
    #[builder(default)]
    #[serde(default)]
    feedback: Option<String>,
    #[builder(default)]
    #[serde(default)]
    customer: Option<String>,
    #[builder(setter(into))]
    product: String,
    #[builder(setter(into))]
    vendor: String,
}

impl Feedback {
    pub fn id(&self) -> &FeedbackId {
        &self.id
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub fn customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }
}

/// A feedback record that has not been stored yet.
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct NewFeedback {
    rating: i32,
    #[builder(default)]
    feedback: Option<String>,
    #[builder(default)]
    customer: Option<String>,
    #[builder(setter(into))]
    product: String,
    #[builder(setter(into))]
    vendor: String,
}

impl NewFeedback {
    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn into_feedback(self, id: FeedbackId) -> Feedback {
        Feedback {
            id,
            rating: self.rating,
            feedback: self.feedback,
            customer: self.customer,
            product: self.product,
            vendor: self.vendor,
        }
    }
}

#[derive(Debug, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    total_documents: u64,
    is_first_page: bool,
    is_last_page: bool,
    documents: Vec<Feedback>,
}

impl PageResult {
    pub fn total_documents(&self) -> u64 {
        self.total_documents
    }

    pub fn is_first_page(&self) -> bool {
        self.is_first_page
    }

    pub fn is_last_page(&self) -> bool {
        self.is_last_page
    }

    pub fn documents(&self) -> &[Feedback] {
        &self.documents
    }

    pub fn into_documents(self) -> Vec<Feedback> {
        self.documents
    }
}
