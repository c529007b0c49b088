use crate::error::AppError;

const NONE: &str = "none";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemToPurchase {
    pub name: String,
    pub description: String,
    pub price: u32,
    pub quantity: u32,
}

impl Default for ItemToPurchase {
    fn default() -> Self {
        ItemToPurchase {
            name: NONE.to_string(),
            description: NONE.to_string(),
            price: 0,
            quantity: 0,
        }
    }
}

impl ItemToPurchase {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: u32,
        quantity: u32,
    ) -> Self {
        ItemToPurchase {
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        }
    }

    /// Widened to `u64`, which holds any `u32 * u32` product.
    pub fn total_cost(&self) -> u64 {
        u64::from(self.price) * u64::from(self.quantity)
    }

    /// `Nike Romaleos 2 @ $189 = $378`
    pub fn cost_line(&self) -> String {
        format!(
            "{} {} @ ${} = ${}",
            self.name,
            self.quantity,
            self.price,
            self.total_cost()
        )
    }

    pub fn description_line(&self) -> String {
        format!("{}: {}", self.name, self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingCart {
    pub customer_name: String,
    pub date: String,
    items: Vec<ItemToPurchase>,
}

impl Default for ShoppingCart {
    fn default() -> Self {
        ShoppingCart::new(NONE, "January 1, 2016")
    }
}

impl ShoppingCart {
    pub fn new(customer_name: impl Into<String>, date: impl Into<String>) -> Self {
        ShoppingCart {
            customer_name: customer_name.into(),
            date: date.into(),
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[ItemToPurchase] {
        &self.items
    }

    pub fn add_item(&mut self, item: ItemToPurchase) {
        self.items.push(item);
    }

    pub fn remove_item(&mut self, name: &str) -> Result<ItemToPurchase, AppError> {
        let index = self
            .position(name)
            .ok_or(AppError::ItemNotFound { action: "removed" })?;
        Ok(self.items.remove(index))
    }

    /// Updates the item with the same name. Fields still holding their
    /// default value (`"none"` or 0) are left alone.
    pub fn modify_item(&mut self, changes: &ItemToPurchase) -> Result<(), AppError> {
        let index = self
            .position(&changes.name)
            .ok_or(AppError::ItemNotFound { action: "modified" })?;
        let item = &mut self.items[index];

        if changes.description != NONE {
            item.description = changes.description.clone();
        }
        if changes.price != 0 {
            item.price = changes.price;
        }
        if changes.quantity != 0 {
            item.quantity = changes.quantity;
        }
        Ok(())
    }

    pub fn num_items_in_cart(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of the item totals, saturating at `u64::MAX`.
    pub fn cost_of_cart(&self) -> u64 {
        self.items
            .iter()
            .map(ItemToPurchase::total_cost)
            .fold(0, u64::saturating_add)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    fn header(&self) -> String {
        format!("{}'s Shopping Cart - {}", self.customer_name, self.date)
    }

    pub fn render_total(&self) -> String {
        let mut out = format!(
            "{}\nNumber of Items: {}\n\n",
            self.header(),
            self.num_items_in_cart()
        );

        if self.items.is_empty() {
            out.push_str("SHOPPING CART IS EMPTY\n");
        }
        for item in &self.items {
            out.push_str(&item.cost_line());
            out.push('\n');
        }

        out.push_str(&format!("\nTotal: ${}\n", self.cost_of_cart()));
        out
    }

    pub fn render_descriptions(&self) -> String {
        let mut out = format!("{}\n\nItem Descriptions\n", self.header());
        for item in &self.items {
            out.push_str(&item.description_line());
            out.push('\n');
        }
        out
    }
}
