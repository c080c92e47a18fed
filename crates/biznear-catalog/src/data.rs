//! Embedded reference data for Sri Lanka.
//!
//! Declaration order is load-bearing: text-to-intent matching scans these
//! tables top to bottom and the first satisfying entry wins. Reorder only
//! with the matching tests in mind.

/// The 25 administrative districts.
pub(crate) const DISTRICTS: &[&str] = &[
    "Ampara",
    "Anuradhapura",
    "Badulla",
    "Batticaloa",
    "Colombo",
    "Galle",
    "Gampaha",
    "Hambantota",
    "Jaffna",
    "Kalutara",
    "Kandy",
    "Kegalle",
    "Kilinochchi",
    "Kurunegala",
    "Mannar",
    "Matale",
    "Matara",
    "Monaragala",
    "Mullaitivu",
    "Nuwara Eliya",
    "Polonnaruwa",
    "Puttalam",
    "Ratnapura",
    "Trincomalee",
    "Vavuniya",
];

/// Towns: (name, district, lat, lng).
///
/// Town names deliberately avoid colliding with bare district names so the
/// district scan stays reachable for inputs like "hotel Kandy".
pub(crate) const TOWNS: &[(&str, &str, f64, f64)] = &[
    ("Jaffna City", "Jaffna", 9.6615, 80.0070),
    ("Nallur", "Jaffna", 9.6740, 80.0290),
    ("Point Pedro", "Jaffna", 9.8161, 80.2328),
    ("Chavakachcheri", "Jaffna", 9.6575, 80.1628),
    ("Colombo Fort", "Colombo", 6.9355, 79.8487),
    ("Dehiwala", "Colombo", 6.8565, 79.8640),
    ("Moratuwa", "Colombo", 6.7730, 79.8816),
    ("Maharagama", "Colombo", 6.8480, 79.9265),
    ("Nugegoda", "Colombo", 6.8649, 79.8997),
    ("Negombo", "Gampaha", 7.2083, 79.8358),
    ("Ja-Ela", "Gampaha", 7.0744, 79.8919),
    ("Wattala", "Gampaha", 6.9890, 79.8916),
    ("Kadawatha", "Gampaha", 7.0011, 79.9502),
    ("Kandy City", "Kandy", 7.2906, 80.6337),
    ("Peradeniya", "Kandy", 7.2594, 80.5972),
    ("Katugastota", "Kandy", 7.3223, 80.6167),
    ("Gampola", "Kandy", 7.1647, 80.5696),
    ("Galle Fort", "Galle", 6.0300, 80.2167),
    ("Hikkaduwa", "Galle", 6.1395, 80.1063),
    ("Ambalangoda", "Galle", 6.2355, 80.0538),
    ("Weligama", "Matara", 5.9753, 80.4297),
    ("Dikwella", "Matara", 5.9651, 80.6944),
    ("Tangalle", "Hambantota", 6.0235, 80.7948),
    ("Tissamaharama", "Hambantota", 6.2803, 81.2910),
    ("Panadura", "Kalutara", 6.7133, 79.9026),
    ("Beruwala", "Kalutara", 6.4788, 79.9828),
    ("Horana", "Kalutara", 6.7159, 80.0628),
    ("Kuliyapitiya", "Kurunegala", 7.4686, 80.0407),
    ("Chilaw", "Puttalam", 7.5758, 79.7953),
    ("Wennappuwa", "Puttalam", 7.3509, 79.8445),
    ("Mihintale", "Anuradhapura", 8.3592, 80.5103),
    ("Kekirawa", "Anuradhapura", 8.0369, 80.5937),
    ("Kaduruwela", "Polonnaruwa", 7.9333, 81.0333),
    ("Bandarawela", "Badulla", 6.8320, 80.9870),
    ("Ella", "Badulla", 6.8667, 81.0466),
    ("Haputale", "Badulla", 6.7654, 80.9514),
    ("Hatton", "Nuwara Eliya", 6.8916, 80.5955),
    ("Talawakele", "Nuwara Eliya", 6.9366, 80.6582),
    ("Embilipitiya", "Ratnapura", 6.3433, 80.8522),
    ("Balangoda", "Ratnapura", 6.6542, 80.6983),
    ("Mawanella", "Kegalle", 7.2534, 80.4466),
    ("Warakapola", "Kegalle", 7.2261, 80.1983),
    ("Kattankudy", "Batticaloa", 7.6794, 81.7323),
    ("Eravur", "Batticaloa", 7.7667, 81.6000),
    ("Kalmunai", "Ampara", 7.4167, 81.8167),
    ("Akkaraipattu", "Ampara", 7.2167, 81.8500),
    ("Kinniya", "Trincomalee", 8.4811, 81.1836),
    ("Nilaveli", "Trincomalee", 8.6952, 81.1895),
    ("Paranthan", "Kilinochchi", 9.4376, 80.4069),
    ("Pesalai", "Mannar", 9.0920, 79.8277),
    ("Dambulla", "Matale", 7.8742, 80.6511),
    ("Sigiriya", "Matale", 7.9570, 80.7603),
    ("Wellawaya", "Monaragala", 6.7360, 81.1029),
    ("Puthukkudiyiruppu", "Mullaitivu", 9.3260, 80.6955),
];

/// Categories: (canonical name, keyword synonyms).
pub(crate) const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Restaurants & Cafes",
        &["restaurant", "cafe", "bakery", "eatery", "catering", "food city"],
    ),
    (
        "Health & Medical",
        &[
            "clinic", "doctor", "dentist", "hospital", "pharmacy", "medical", "ayurveda",
        ],
    ),
    (
        "Hotels & Lodging",
        &["hotel", "guesthouse", "guest house", "inn", "lodge", "resort", "villa"],
    ),
    (
        "Groceries & Supermarkets",
        &["grocery", "supermarket", "mini mart", "provisions"],
    ),
    (
        "Education & Tuition",
        &["school", "tuition", "institute", "nursery", "campus"],
    ),
    (
        "Automotive",
        &["garage", "mechanic", "spare parts", "tyre", "car wash", "service station"],
    ),
    (
        "Beauty & Salons",
        &["salon", "barber", "spa", "beautician", "bridal"],
    ),
    (
        "Retail & Shopping",
        &["shop", "boutique", "textiles", "electronics", "bookshop"],
    ),
    (
        "Professional Services",
        &["lawyer", "notary", "accountant", "surveyor", "architect", "insurance"],
    ),
    (
        "Construction & Hardware",
        &["hardware", "builder", "contractor", "timber", "paint"],
    ),
];
