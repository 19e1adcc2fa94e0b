// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named test item storage for the range tester.
//!
//! Items are kept in insertion order so reports are reproducible.
//! Names are unique: the first registration of a name wins and later
//! duplicates are ignored.

/// Prefix used for generated item names.
pub const DEFAULT_PREFIX: &str = "Test";

/// A value under test plus its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct TestItem<T> {
    pub value: T,
    /// Unique key; empty means "generate one on insertion".
    pub name: String,
    pub description: String,
    /// Invert the predicate's verdict for this item.
    pub expected_to_fail: bool,
}

impl<T> TestItem<T> {
    /// An unnamed item; a name is generated when it is added.
    pub fn new(value: T) -> Self {
        Self::named(value, "")
    }

    pub fn named(value: T, name: impl Into<String>) -> Self {
        Self { value, name: name.into(), description: String::new(), expected_to_fail: false }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn expect_fail(mut self) -> Self {
        self.expected_to_fail = true;
        self
    }
}

/// Insertion-ordered collection of uniquely named test items.
#[derive(Debug, Clone)]
pub struct ItemRegistry<T> {
    items: Vec<TestItem<T>>,
}

impl<T> Default for ItemRegistry<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ItemRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value under a generated name.
    pub fn add(&mut self, value: T) -> &mut Self {
        self.add_item(TestItem::new(value))
    }

    /// Add a value with a name and description. An empty name is generated.
    pub fn add_named(&mut self, value: T, name: &str, description: &str) -> &mut Self {
        self.add_item(TestItem::named(value, name).with_description(description))
    }

    /// Add a prepared item. Duplicate names are ignored.
    pub fn add_item(&mut self, mut item: TestItem<T>) -> &mut Self {
        if item.name.is_empty() {
            item.name = self.unique_name(DEFAULT_PREFIX);
        } else if self.contains(&item.name) {
            tracing::debug!("ignoring duplicate test item {}", item.name);
            return self;
        }
        self.items.push(item);
        self
    }

    /// Add every value, naming each `<prefix>_<n>`.
    pub fn add_all<I>(&mut self, values: I, prefix: &str) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        let prefix = if prefix.is_empty() { DEFAULT_PREFIX } else { prefix };
        for value in values {
            let name = self.unique_name(prefix);
            self.add_item(TestItem::named(value, name));
        }
        self
    }

    /// Add every prepared item.
    pub fn add_items<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = TestItem<T>>,
    {
        for item in items {
            self.add_item(item);
        }
        self
    }

    pub fn remove(&mut self, name: &str) -> &mut Self {
        self.items.retain(|item| item.name != name);
        self
    }

    /// Remove every item matching `pred` in one pass.
    pub fn remove_if<F>(&mut self, mut pred: F) -> &mut Self
    where
        F: FnMut(&TestItem<T>) -> bool,
    {
        self.items.retain(|item| !pred(item));
        self
    }

    /// Mark the named item as expected to fail. Unknown names are ignored.
    pub fn expect_fail(&mut self, name: &str) -> &mut Self {
        if let Some(item) = self.items.iter_mut().find(|item| item.name == name) {
            item.expected_to_fail = true;
        }
        self
    }

    /// Mark every item matching `pred` as expected to fail.
    pub fn expect_fail_if<F>(&mut self, mut pred: F) -> &mut Self
    where
        F: FnMut(&TestItem<T>) -> bool,
    {
        for item in &mut self.items {
            if pred(item) {
                item.expected_to_fail = true;
            }
        }
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    pub fn get(&self, name: &str) -> Option<&TestItem<T>> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestItem<T>> {
        self.items.iter()
    }

    /// Generate `<prefix>_<n>`, counting up from `len() + 1` past any taken name.
    pub fn unique_name(&self, prefix: &str) -> String {
        let mut counter = self.items.len() + 1;
        loop {
            let name = format!("{prefix}_{counter}");
            if !self.contains(&name) {
                return name;
            }
            counter += 1;
        }
    }
}

impl<'a, T> IntoIterator for &'a ItemRegistry<T> {
    type Item = &'a TestItem<T>;
    type IntoIter = std::slice::Iter<'a, TestItem<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
