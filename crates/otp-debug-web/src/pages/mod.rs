mod itinerary;

pub use itinerary::ItineraryPage;
