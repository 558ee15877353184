use serde::{Deserialize, Serialize};

/// A destination in the static reference catalog. Not user-owned and never
/// written to the snapshot store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    pub image: String,
    pub description: String,
    pub best_time_to_visit: String,
    pub average_cost: i64,
    pub rating: f64,
    pub tags: Vec<String>,
}

/// Immutable destination catalog with linear lookup and filtering.
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            destinations: builtin_destinations(),
        }
    }

    pub fn all(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn get(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    /// Case-insensitive match against destination name or country.
    pub fn search(&self, query: &str) -> Vec<&Destination> {
        let query = query.to_lowercase();
        self.destinations
            .iter()
            .filter(|d| {
                d.name.to_lowercase().contains(&query) || d.country.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn with_tag(&self, tag: &str) -> Vec<&Destination> {
        self.destinations
            .iter()
            .filter(|d| d.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
            .collect()
    }

    /// Every tag used across the catalog, deduplicated and sorted.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .destinations
            .iter()
            .flat_map(|d| d.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn destination(
    id: &str,
    name: &str,
    country: &str,
    image: &str,
    description: &str,
    best_time_to_visit: &str,
    average_cost: i64,
    rating: f64,
    tags: &[&str],
) -> Destination {
    Destination {
        id: id.to_string(),
        name: name.to_string(),
        country: country.to_string(),
        image: image.to_string(),
        description: description.to_string(),
        best_time_to_visit: best_time_to_visit.to_string(),
        average_cost,
        rating,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn builtin_destinations() -> Vec<Destination> {
    vec![
        destination(
            "1",
            "Paris",
            "France",
            "https://images.pexels.com/photos/338515/pexels-photo-338515.jpeg?auto=compress&cs=tinysrgb&w=800",
            "The City of Light, known for its art, fashion, gastronomy, and culture.",
            "April to June, September to November",
            12500,
            4.8,
            &["Culture", "Art", "Romance", "Museums", "Architecture"],
        ),
        destination(
            "2",
            "Tokyo",
            "Japan",
            "https://images.pexels.com/photos/2614818/pexels-photo-2614818.jpeg?auto=compress&cs=tinysrgb&w=800",
            "A vibrant metropolis blending traditional and modern Japan.",
            "March to May, September to November",
            15000,
            4.7,
            &["Technology", "Culture", "Food", "Shopping", "Temples"],
        ),
        destination(
            "3",
            "Santorini",
            "Greece",
            "https://images.pexels.com/photos/1010657/pexels-photo-1010657.jpeg?auto=compress&cs=tinysrgb&w=800",
            "Stunning Greek island known for its white-washed buildings and sunsets.",
            "April to June, September to October",
            10000,
            4.9,
            &["Romance", "Beaches", "Sunsets", "Wine", "Architecture"],
        ),
        destination(
            "4",
            "New York",
            "USA",
            "https://images.pexels.com/photos/290386/pexels-photo-290386.jpeg?auto=compress&cs=tinysrgb&w=800",
            "The Big Apple - a bustling metropolis with endless possibilities.",
            "April to June, September to November",
            16500,
            4.6,
            &["City", "Shopping", "Shows", "Museums", "Nightlife"],
        ),
        destination(
            "5",
            "Bali",
            "Indonesia",
            "https://images.pexels.com/photos/1007426/pexels-photo-1007426.jpeg?auto=compress&cs=tinysrgb&w=800",
            "Tropical paradise with beautiful beaches, temples, and rice terraces.",
            "April to October",
            6500,
            4.7,
            &["Beaches", "Temples", "Nature", "Relaxation", "Adventure"],
        ),
        destination(
            "6",
            "Barcelona",
            "Spain",
            "https://images.pexels.com/photos/1388030/pexels-photo-1388030.jpeg?auto=compress&cs=tinysrgb&w=800",
            "Vibrant Catalan city known for Gaudí's architecture and beaches.",
            "May to June, September to October",
            9000,
            4.8,
            &["Architecture", "Beaches", "Culture", "Food", "Art"],
        ),
        destination(
            "7",
            "Dubai",
            "UAE",
            "https://images.pexels.com/photos/1470405/pexels-photo-1470405.jpeg?auto=compress&cs=tinysrgb&w=800",
            "Futuristic city with luxury shopping, ultramodern architecture, and desert adventures.",
            "November to March",
            11000,
            4.6,
            &["Luxury", "Shopping", "Desert", "Architecture", "Adventure"],
        ),
        destination(
            "8",
            "London",
            "United Kingdom",
            "https://images.pexels.com/photos/460672/pexels-photo-460672.jpeg?auto=compress&cs=tinysrgb&w=800",
            "Historic capital with royal palaces, world-class museums, and vibrant culture.",
            "May to September",
            14000,
            4.7,
            &["History", "Museums", "Culture", "Royal", "Theatre"],
        ),
        destination(
            "9",
            "Singapore",
            "Singapore",
            "https://images.pexels.com/photos/2265876/pexels-photo-2265876.jpeg?auto=compress&cs=tinysrgb&w=800",
            "Modern city-state known for its gardens, food scene, and multicultural heritage.",
            "February to April",
            8500,
            4.8,
            &["Food", "Gardens", "Modern", "Culture", "Shopping"],
        ),
        destination(
            "10",
            "Sydney",
            "Australia",
            "https://images.pexels.com/photos/1878293/pexels-photo-1878293.jpeg?auto=compress&cs=tinysrgb&w=800",
            "Iconic harbor city with stunning beaches, opera house, and laid-back lifestyle.",
            "September to November, March to May",
            13500,
            4.7,
            &["Beaches", "Harbor", "Opera", "Wildlife", "Outdoor"],
        ),
        destination(
            "11",
            "Istanbul",
            "Turkey",
            "https://images.pexels.com/photos/1440476/pexels-photo-1440476.jpeg?auto=compress&cs=tinysrgb&w=800",
            "Historic city bridging Europe and Asia with rich Ottoman heritage and vibrant bazaars.",
            "April to May, September to November",
            7500,
            4.6,
            &["History", "Culture", "Bazaars", "Architecture", "Food"],
        ),
        destination(
            "12",
            "Bangkok",
            "Thailand",
            "https://images.pexels.com/photos/1007426/pexels-photo-1007426.jpeg?auto=compress&cs=tinysrgb&w=800",
            "Bustling capital with ornate temples, vibrant street life, and incredible street food.",
            "November to March",
            5500,
            4.5,
            &["Temples", "Street Food", "Culture", "Markets", "Nightlife"],
        ),
    ]
}
