use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterCategory {
    Priority,
    Category,
    Complexity,
    BusinessValue,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 4] = [
        FilterCategory::Priority,
        FilterCategory::Category,
        FilterCategory::Complexity,
        FilterCategory::BusinessValue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterCategory::Priority => "priority",
            FilterCategory::Category => "category",
            FilterCategory::Complexity => "complexity",
            FilterCategory::BusinessValue => "businessValue",
        }
    }

    /// Attribute carrying this category's value on a filterable element.
    pub fn data_attribute(&self) -> &'static str {
        match self {
            FilterCategory::Priority => "data-priority",
            FilterCategory::Category => "data-category",
            FilterCategory::Complexity => "data-complexity",
            FilterCategory::BusinessValue => "data-business-value",
        }
    }

    fn index(&self) -> usize {
        match self {
            FilterCategory::Priority => 0,
            FilterCategory::Category => 1,
            FilterCategory::Complexity => 2,
            FilterCategory::BusinessValue => 3,
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "priority" => Ok(FilterCategory::Priority),
            "category" => Ok(FilterCategory::Category),
            "complexity" => Ok(FilterCategory::Complexity),
            "businessvalue" => Ok(FilterCategory::BusinessValue),
            _ => Err(format!(
                "unknown filter category '{s}' (expected priority, category, complexity or businessValue)"
            )),
        }
    }
}

impl Serialize for FilterCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Per-category values carried by a single filterable element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterValues {
    values: [Option<String>; 4],
}

impl FilterValues {
    pub fn get(&self, category: FilterCategory) -> Option<&str> {
        self.values[category.index()].as_deref()
    }

    pub fn set(&mut self, category: FilterCategory, value: impl Into<String>) {
        self.values[category.index()] = Some(value.into());
    }

    pub fn with(mut self, category: FilterCategory, value: impl Into<String>) -> Self {
        self.set(category, value);
        self
    }
}

impl Serialize for FilterValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let map: BTreeMap<&str, &str> = FilterCategory::ALL
            .iter()
            .filter_map(|c| self.get(*c).map(|v| (c.as_str(), v)))
            .collect();
        map.serialize(serializer)
    }
}

/// Selected values per category. Every category is always present, possibly empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    selected: BTreeMap<FilterCategory, BTreeSet<String>>,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterSelection {
    pub fn new() -> Self {
        Self {
            selected: FilterCategory::ALL
                .iter()
                .map(|c| (*c, BTreeSet::new()))
                .collect(),
        }
    }

    /// Returns true if the selection changed.
    pub fn toggle(&mut self, category: FilterCategory, value: &str, checked: bool) -> bool {
        let set = self.selected.entry(category).or_default();
        if checked {
            set.insert(value.to_string())
        } else {
            set.remove(value)
        }
    }

    pub fn values(&self, category: FilterCategory) -> impl Iterator<Item = &str> {
        self.selected
            .get(&category)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    pub fn is_selected(&self, category: FilterCategory, value: &str) -> bool {
        self.selected
            .get(&category)
            .is_some_and(|set| set.contains(value))
    }

    pub fn is_empty(&self) -> bool {
        self.selected.values().all(BTreeSet::is_empty)
    }

    pub fn categories(&self) -> impl Iterator<Item = FilterCategory> + '_ {
        self.selected.keys().copied()
    }

    pub fn clear(&mut self) {
        for set in self.selected.values_mut() {
            set.clear();
        }
    }

    /// AND across categories with a selection, OR within a category.
    pub fn matches(&self, values: &FilterValues) -> bool {
        self.selected.iter().all(|(category, wanted)| {
            wanted.is_empty()
                || values
                    .get(*category)
                    .is_some_and(|value| wanted.contains(value))
        })
    }
}

/// Visibility of every element, in order.
pub fn compute_visibility<'a, I>(selection: &FilterSelection, elements: I) -> Vec<bool>
where
    I: IntoIterator<Item = &'a FilterValues>,
{
    elements
        .into_iter()
        .map(|values| selection.matches(values))
        .collect()
}

/// "N of M shown"
pub fn visible_count_label(visible: usize, total: usize) -> String {
    format!("{visible} of {total} shown")
}
