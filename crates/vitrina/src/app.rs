//! Root composition: data provider, category filter, card grid.
//!
//! The application state follows the Elm pattern from `vitrina-core`: the
//! fetch completes as a message, the select widget's replacement selection
//! arrives as a message, and the view is rebuilt from state. The select is
//! controlled; the filter selection lives here, never in the widget.

use serde::{Deserialize, Serialize};
use std::any::Any;
use vitrina_catalog::{CatalogClient, CatalogError, LoadState, Product};
use vitrina_core::{Command, State, Theme, ThemeHandle, ThemeMode};
use vitrina_widgets::{
    CardItem, CardList, Column, Select, SelectOption, Selection, SelectionChanged, Text, Toggle,
    ToggleChanged,
};

/// Messages driving the catalog.
#[derive(Debug)]
pub enum CatalogMessage {
    /// The one fetch finished, successfully or not.
    ProductsLoaded(Result<Vec<Product>, CatalogError>),
    /// The user changed the category filter; full replacement, never a delta.
    FilterChanged(Selection),
    /// The user flipped the light/dark switch.
    ThemeToggled,
}

/// Serializable application state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    /// Product collection load state
    pub products: LoadState,
    /// Current category filter, owned here (the select is controlled)
    pub filter: Selection,
    /// Current theme mode
    pub theme: ThemeMode,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            products: LoadState::Loading,
            // Empty filter means "show all".
            filter: Selection::multiple(),
            theme: ThemeMode::Light,
        }
    }
}

impl State for CatalogState {
    type Message = CatalogMessage;

    fn update(&mut self, msg: Self::Message) -> Command<Self::Message> {
        match msg {
            CatalogMessage::ProductsLoaded(result) => {
                self.products = LoadState::from_result(result);
            }
            CatalogMessage::FilterChanged(selection) => {
                self.filter = selection;
            }
            CatalogMessage::ThemeToggled => {
                self.theme = self.theme.toggled();
            }
        }
        Command::None
    }
}

/// Distinct category options from the fetched products.
///
/// First-seen order, duplicates collapsed by value.
#[must_use]
pub fn category_options(products: &[Product]) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = Vec::new();
    for product in products {
        if !options.iter().any(|o| o.value == product.category) {
            options.push(SelectOption::simple(product.category.clone()));
        }
    }
    options
}

/// Products whose category matches any selected option.
///
/// An empty selection shows everything.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], filter: &Selection) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| filter.is_empty() || filter.contains_value(&p.category))
        .collect()
}

/// The composed catalog application.
pub struct CatalogApp {
    state: CatalogState,
    client: CatalogClient,
    theme: ThemeHandle,
}

impl Default for CatalogApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogApp {
    /// Create an app against the default endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_client(CatalogClient::new())
    }

    /// Create an app with a custom client.
    #[must_use]
    pub fn with_client(client: CatalogClient) -> Self {
        Self {
            state: CatalogState::default(),
            client,
            theme: ThemeHandle::default(),
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// The injectable process-wide theme handle.
    #[must_use]
    pub fn theme(&self) -> &ThemeHandle {
        &self.theme
    }

    /// The validated product collection.
    ///
    /// # Panics
    ///
    /// Panics if the fetch has not completed successfully; reading products
    /// outside the provider's ready state is a programming error.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.state
            .products
            .products()
            .expect("product collection read before the fetch completed")
    }

    /// The command that starts the one fetch for this mount.
    #[must_use]
    pub fn init(&self) -> Command<CatalogMessage> {
        let client = self.client.clone();
        Command::task(async move { CatalogMessage::ProductsLoaded(client.fetch_products().await) })
    }

    /// Apply a message, keeping the shared theme handle in sync.
    pub fn update(&mut self, msg: CatalogMessage) -> Command<CatalogMessage> {
        let cmd = self.state.update(msg);
        if self.theme.mode() != self.state.theme {
            self.theme.set(Theme::for_mode(self.state.theme));
        }
        cmd
    }

    /// Translate a widget message into a catalog message.
    #[must_use]
    pub fn map_widget_message(message: &(dyn Any + Send)) -> Option<CatalogMessage> {
        if let Some(changed) = message.downcast_ref::<SelectionChanged>() {
            return Some(CatalogMessage::FilterChanged(changed.selection.clone()));
        }
        if message.downcast_ref::<ToggleChanged>().is_some() {
            return Some(CatalogMessage::ThemeToggled);
        }
        None
    }

    /// Build the widget tree for the current state.
    #[must_use]
    pub fn view(&self) -> Column {
        let palette = self.theme.get().palette;
        let column = Column::new().gap(16.0).with_test_id("catalog-root");

        match &self.state.products {
            LoadState::Loading => column.child(
                Text::new("Loading...")
                    .color(palette.on_background)
                    .with_test_id("loading"),
            ),
            LoadState::Failed(_) => column.child(
                Text::new("Failed to load products")
                    .color(palette.error)
                    .with_test_id("load-error"),
            ),
            LoadState::Ready(products) => {
                let select = Select::multiple()
                    .options(category_options(products))
                    .value(self.state.filter.clone())
                    .placeholder("Filter by category")
                    .with_accessible_name("Category filter")
                    .with_test_id("category-filter");

                let toggle = Toggle::new()
                    .on(self.state.theme == ThemeMode::Dark)
                    .label("Dark mode")
                    .with_test_id("theme-toggle");

                let cards = CardList::new()
                    .items(
                        filter_products(products, &self.state.filter)
                            .into_iter()
                            .map(|p| CardItem {
                                title: p.title.clone(),
                                description: p.description.clone(),
                                price: p.price,
                                category: p.category.clone(),
                                image: p.image.clone(),
                            }),
                    )
                    .with_test_id("product-cards");

                column.child(select).child(toggle).child(cards)
            }
        }
    }
}
