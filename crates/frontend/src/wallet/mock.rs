//! Scripted provider for tests.
//!
//! Responses are queued per method. The last queued response for a method
//! is repeated once the others are used up; a method with nothing queued
//! fails with "method not supported".

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use serde_json::Value;

use super::provider::{ProviderError, WalletProvider};

#[derive(Default)]
pub struct MockProvider {
    responses: RefCell<HashMap<String, VecDeque<Result<Value, ProviderError>>>>,
    calls: RefCell<Vec<(String, Value)>>,
    sleeps: RefCell<Vec<u32>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: &str, value: Value) -> &Self {
        self.push(method, Ok(value))
    }

    pub fn fail(&self, method: &str, code: i64, message: &str) -> &Self {
        self.push(method, Err(ProviderError::new(code, message)))
    }

    fn push(&self, method: &str, response: Result<Value, ProviderError>) -> &Self {
        self.responses
            .borrow_mut()
            .entry(method.to_string())
            .or_default()
            .push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.borrow().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(m, _)| m.clone()).collect()
    }

    pub fn count(&self, method: &str) -> usize {
        self.calls.borrow().iter().filter(|(m, _)| m == method).count()
    }

    pub fn params_of(&self, method: &str) -> Option<Value> {
        self.calls
            .borrow()
            .iter()
            .find(|(m, _)| m == method)
            .map(|(_, p)| p.clone())
    }

    pub fn sleeps(&self) -> Vec<u32> {
        self.sleeps.borrow().clone()
    }
}

#[async_trait(?Send)]
impl WalletProvider for MockProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        self.calls
            .borrow_mut()
            .push((method.to_string(), params));

        let mut responses = self.responses.borrow_mut();
        match responses.get_mut(method) {
            Some(queue) if queue.len() > 1 => queue
                .pop_front()
                .unwrap_or_else(|| Err(ProviderError::internal("empty queue"))),
            Some(queue) => queue
                .front()
                .cloned()
                .unwrap_or_else(|| Err(ProviderError::new(4200, "method not supported"))),
            None => Err(ProviderError::new(4200, format!("{} not supported", method))),
        }
    }

    async fn sleep(&self, ms: u32) {
        self.sleeps.borrow_mut().push(ms);
    }
}
