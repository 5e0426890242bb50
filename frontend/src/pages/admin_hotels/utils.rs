use crate::api::{Hotel, HotelPatch, HotelPrice};

pub const PAGE_SIZE: usize = 10;

/// Local mirror of the hotels collection.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelTable {
    pub hotels: Vec<Hotel>,
    pub loading: bool,
    pub load_error: Option<String>,
}

impl Default for HotelTable {
    fn default() -> Self {
        Self {
            hotels: Vec::new(),
            loading: true,
            load_error: None,
        }
    }
}

impl HotelTable {
    pub fn loaded(&mut self, hotels: Vec<Hotel>) {
        self.hotels = hotels;
        self.load_error = None;
        self.loading = false;
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        self.load_error = Some(message.into());
        self.loading = false;
    }

    /// Merges `patch` into the record with `id`; other records are untouched.
    pub fn apply_update(&mut self, id: &str, patch: &HotelPatch) {
        if let Some(hotel) = self.hotels.iter_mut().find(|hotel| hotel.id == id) {
            hotel.apply_patch(patch);
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.hotels.retain(|hotel| hotel.id != id);
    }

    pub fn find(&self, id: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|hotel| hotel.id == id)
    }
}

pub fn filter_by_name(hotels: &[Hotel], query: &str) -> Vec<Hotel> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return hotels.to_vec();
    }
    hotels
        .iter()
        .filter(|hotel| hotel.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Hotel>,
    /// 1-based, clamped into `1..=total_pages`.
    pub number: usize,
    pub total_pages: usize,
}

impl Page {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

pub fn paginate(hotels: &[Hotel], page: usize) -> Page {
    let total_pages = total_pages(hotels.len());
    let number = page.clamp(1, total_pages);
    let items = hotels
        .iter()
        .skip((number - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .cloned()
        .collect();
    Page {
        items,
        number,
        total_pages,
    }
}

/// Text-field rendition of a hotel for the edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelEditDraft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: String,
}

impl From<&Hotel> for HotelEditDraft {
    fn from(hotel: &Hotel) -> Self {
        Self {
            id: hotel.id.clone(),
            name: hotel.name.clone(),
            description: hotel.description_text().to_string(),
            image: hotel.image.clone(),
            price: hotel.price.to_string(),
        }
    }
}

impl HotelEditDraft {
    /// Builds a patch holding only the fields that differ from `original`.
    pub fn to_patch(&self, original: &Hotel) -> Result<HotelPatch, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".into());
        }

        let mut patch = HotelPatch::default();
        if name != original.name {
            patch.name = Some(name.to_string());
        }
        if self.description != original.description_text() {
            patch.description = Some(self.description.clone());
        }
        // Text fields are compared as the form shows them; a stored label like
        // "120" stays a label unless its text is edited.
        let image = self.image.trim();
        if image != original.image.trim() {
            patch.image = Some(image.to_string());
        }
        if self.price.trim() != original.price.to_string().trim() {
            patch.price = Some(parse_price(&self.price));
        }

        if patch.is_empty() {
            return Err("No changes to save".into());
        }
        Ok(patch)
    }
}

/// Numeric input stays numeric; anything else is kept as a label.
pub fn parse_price(input: &str) -> HotelPrice {
    let trimmed = input.trim();
    match serde_json::from_str::<serde_json::Number>(trimmed) {
        Ok(number) => HotelPrice::Amount(number),
        Err(_) => HotelPrice::Label(trimmed.to_string()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }
}
