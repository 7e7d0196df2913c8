use crate::category::Category;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::ops::{Index, IndexMut};

/// Metric tons CO2e per year for each of the ten categories.
///
/// Every category is always present. Iteration and serialization follow
/// [`Category::ALL`] order.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct EmissionBreakdown {
    tons: [f64; Category::COUNT],
}

impl EmissionBreakdown {
    /// A breakdown with every category at zero.
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> f64 {
        self.tons[category.index()]
    }

    pub fn set(&mut self, category: Category, tons: f64) {
        self.tons[category.index()] = tons;
    }

    /// (category, tons) pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Raw values in display order.
    pub fn values(&self) -> &[f64; Category::COUNT] {
        &self.tons
    }
}

impl Index<Category> for EmissionBreakdown {
    type Output = f64;

    fn index(&self, category: Category) -> &f64 {
        &self.tons[category.index()]
    }
}

impl IndexMut<Category> for EmissionBreakdown {
    fn index_mut(&mut self, category: Category) -> &mut f64 {
        &mut self.tons[category.index()]
    }
}

impl Serialize for EmissionBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, tons) in self.iter() {
            map.serialize_entry(category.key(), &tons)?;
        }
        map.end()
    }
}
