// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request dispatch over engines owned by one session.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use serde_json::{json, Value};

use super::config::DriverConfig;
use super::error::DriverError;
use super::request::*;
use crate::exact::ExactIndex;
use crate::fuzzy::FuzzyIndex;
use crate::membership::MembershipIndex;
use crate::util::normalize::normalize;

/// Engines and bookkeeping for one caller.
///
/// The Bloom filter and the order index persist for the life of the session.
/// The BK-tree is built fresh from each request's `items`, since the web app
/// sends the full candidate list every time.
#[derive(Debug, Clone)]
pub struct Session {
    config: DriverConfig,
    filter: MembershipIndex,
    orders: ExactIndex,
    /// Buyer for each order document, indexed by document id.
    buyers: Vec<String>,
}

impl Session {
    /// Fails only if the Bloom configuration is invalid.
    pub fn new(config: DriverConfig) -> Result<Self, DriverError> {
        Ok(Session {
            filter: MembershipIndex::new(config.bloom)?,
            orders: ExactIndex::new(),
            buyers: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn filter(&self) -> &MembershipIndex {
        &self.filter
    }

    pub fn orders(&self) -> &ExactIndex {
        &self.orders
    }

    /// Handle one request, turning any failure into `{"error": "..."}`.
    pub fn respond(&mut self, algorithm: &str, payload: &str) -> Value {
        let result = algorithm
            .parse::<Algorithm>()
            .and_then(|algorithm| self.handle(algorithm, payload));
        result.unwrap_or_else(|e| error_response(&e))
    }

    /// Handle one `suffixkart session` input line.
    pub fn respond_line(&mut self, line: &str) -> Value {
        let result = serde_json::from_str::<SessionRequest>(line)
            .map_err(DriverError::from)
            .and_then(|req| {
                let algorithm = req.algorithm.parse::<Algorithm>()?;
                self.handle_value(algorithm, req.payload)
            });
        result.unwrap_or_else(|e| error_response(&e))
    }

    /// Decode a JSON payload and dispatch it.
    pub fn handle(&mut self, algorithm: Algorithm, payload: &str) -> Result<Value, DriverError> {
        let payload: Value = serde_json::from_str(payload)?;
        self.handle_value(algorithm, payload)
    }

    pub fn handle_value(&mut self, algorithm: Algorithm, payload: Value) -> Result<Value, DriverError> {
        match algorithm {
            Algorithm::Bloom => to_value(self.bloom(serde_json::from_value(payload)?)?),
            Algorithm::BkTree => to_value(self.bktree(serde_json::from_value(payload)?)?),
            Algorithm::SuffixTree => self.suffixtree(serde_json::from_value(payload)?),
        }
    }

    // ========================================================================
    // BLOOM
    // ========================================================================

    pub fn bloom(&mut self, req: BloomRequest) -> Result<Value, DriverError> {
        let op = match req.operation.as_str() {
            "insert" | "check" => req.operation.as_str(),
            other => return Err(DriverError::UnknownOperation(other.to_string())),
        };

        for item in &req.existing_items {
            let key = self.key(item);
            self.filter.insert(&key);
        }

        let key = self.key(&req.item_name);
        if op == "insert" {
            self.filter.insert(&key);
            to_value(BloomInsertResponse {
                success: true,
                message: format!("{} inserted", req.item_name),
            })
        } else {
            to_value(BloomCheckResponse {
                is_unique: !self.filter.probably_contains(&key),
            })
        }
    }

    // ========================================================================
    // BK-TREE
    // ========================================================================

    pub fn bktree(&self, req: BkTreeRequest) -> Result<BkTreeResponse, DriverError> {
        let tolerance = match req.tolerance {
            None => self.config.default_tolerance,
            Some(t) if t < 0 => {
                return Err(crate::EngineError::argument(
                    "query",
                    format!("tolerance must be non-negative, got {}", t),
                )
                .into())
            }
            Some(t) => t as usize,
        };

        // Normalized key -> first original spelling, so responses echo the caller's text.
        let mut originals: HashMap<String, &str> = HashMap::with_capacity(req.items.len());
        let mut index = FuzzyIndex::new();
        for item in &req.items {
            let key = self.key(item);
            if index.insert(&key) {
                originals.insert(key, item.as_str());
            }
        }

        let pattern = self.key(&req.query);
        let matches: Vec<String> = index
            .query_sorted(&pattern, tolerance)
            .into_iter()
            .map(|m| originals.get(m.key).copied().unwrap_or(m.key).to_string())
            .collect();

        Ok(BkTreeResponse {
            total_matches: matches.len(),
            matches,
            query: req.query,
        })
    }

    // ========================================================================
    // SUFFIX TREE
    // ========================================================================

    pub fn suffixtree(&mut self, req: SuffixTreeRequest) -> Result<Value, DriverError> {
        match req.operation.as_str() {
            "add" => {
                let order = req.order.ok_or(DriverError::MissingField {
                    operation: "add",
                    field: "order",
                })?;
                for extra in &req.orders {
                    self.add_order(extra);
                }
                let document_id = self.add_order(&order);
                to_value(OrderAddedResponse {
                    success: true,
                    message: "Order added to suffix tree".to_string(),
                    document_id,
                })
            }
            "search" => {
                let item = req.item.ok_or(DriverError::MissingField {
                    operation: "search",
                    field: "item",
                })?;
                if req.orders.is_empty() {
                    return to_value(self.search_orders(&item)?);
                }

                // Inline orders are visible to this search only.
                let mut orders = self.orders.clone();
                let mut buyers = self.buyers.clone();
                for extra in &req.orders {
                    orders.add_document(&self.order_text(extra));
                    buyers.push(extra.buyer.clone());
                }
                to_value(self.search_in(&orders, &buyers, &item)?)
            }
            other => Err(DriverError::UnknownOperation(other.to_string())),
        }
    }

    /// Index one order. Returns its document id.
    pub fn add_order(&mut self, order: &Order) -> usize {
        let text = self.order_text(order);
        let id = self.orders.add_document(&text);
        self.buyers.push(order.buyer.clone());
        id
    }

    /// Buyers whose orders contain `item`, with every raw occurrence.
    pub fn search_orders(&self, item: &str) -> Result<BuyerSearchResponse, DriverError> {
        self.search_in(&self.orders, &self.buyers, item)
    }

    /// `buyers[d]` is the buyer of document `d` in `orders`.
    fn search_in(
        &self,
        orders: &ExactIndex,
        buyers: &[String],
        item: &str,
    ) -> Result<BuyerSearchResponse, DriverError> {
        let occurrences = orders.find_substring(&self.key(item))?;

        let mut seen: HashSet<&str> = HashSet::new();
        let mut found: Vec<String> = Vec::new();
        for occurrence in &occurrences {
            let buyer = buyers[occurrence.document_id].as_str();
            if seen.insert(buyer) {
                found.push(buyer.to_string());
            }
        }

        Ok(BuyerSearchResponse {
            total_buyers: found.len(),
            buyers: found,
            item: item.to_string(),
            occurrences,
        })
    }

    /// Document text for one order: buyer followed by item.
    fn order_text(&self, order: &Order) -> String {
        format!("{}{}", self.key(&order.buyer), self.key(&order.item))
    }

    /// What the engines see for a caller string.
    fn key(&self, value: &str) -> String {
        if self.config.normalize {
            normalize(value)
        } else {
            value.to_string()
        }
    }
}

fn to_value<T: Serialize>(response: T) -> Result<Value, DriverError> {
    Ok(serde_json::to_value(response)?)
}

fn error_response(error: &DriverError) -> Value {
    json!({ "error": error.to_string() })
}
