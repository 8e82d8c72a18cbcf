//! The built-in menu shown while the store has no categories or items of its own.

use crate::model::{MenuCategory, MenuItem};

const CATEGORIES: [(&str, &str); 10] = [
    ("1", "BREAKFAST"),
    ("2", "DESI DISHES"),
    ("3", "CHICKEN DISHES"),
    ("4", "MUTTON DISHES"),
    ("5", "FISH"),
    ("6", "B.B.Q"),
    ("7", "RICE"),
    ("10", "BREADS"),
    ("11", "VEGETABLES"),
    ("12", "SWEETS"),
];

// (id, category id, name, description, price)
const ITEMS: [(&str, &str, &str, &str, f64); 29] = [
    ("1", "1", "Paratha", "Traditional Pakistani flatbread fried in ghee", 50.0),
    ("2", "1", "Halwa Puri", "Sweet semolina with fried bread and potatoes", 150.0),
    ("3", "2", "Daal Mash", "Lentil curry served with roti", 180.0),
    ("4", "2", "Chana Masala", "Spicy chickpea curry", 200.0),
    ("5", "3", "Chicken Karahi", "Spicy chicken cooked in tomato gravy", 600.0),
    ("6", "3", "Chicken Handi", "Boneless chicken cooked in creamy gravy", 650.0),
    ("7", "4", "Mutton Karahi", "Tender mutton pieces in rich gravy", 1200.0),
    ("8", "4", "Mutton Handi", "Boneless mutton cooked in creamy sauce", 1350.0),
    ("9", "4", "Mutton Tawa", "Spicy mutton cooked on flat pan", 1600.0),
    ("10", "5", "Finger Fish", "Battered and fried fish fillets", 500.0),
    ("11", "5", "Fried Rohu", "Pakistani style deep-fried rohu", 700.0),
    ("12", "6", "Chicken Tikka", "Charcoal grilled chicken pieces", 150.0),
    ("13", "6", "Chicken Malai Boti", "Skewered chicken cubes with cream", 180.0),
    ("14", "6", "Chicken Seekh Kebab", "Chicken mince skewers", 100.0),
    ("15", "6", "Chicken Cheese Boti", "Grilled chicken with cheese", 200.0),
    ("16", "6", "Chicken Kabab Roll", "Grilled chicken kebab in naan", 80.0),
    ("17", "6", "Beef Seekh Kebab", "Beef mince kebab skewers", 120.0),
    ("18", "6", "Beef Kabab Roll", "Grilled beef kebab in naan", 100.0),
    ("19", "6", "Beef Bihari Kebab", "Spicy marinated beef kebab", 180.0),
    ("20", "6", "Beef Ribs", "Charcoal grilled beef ribs", 400.0),
    ("21", "6", "Beef Chapli Kebab", "Flattened spicy beef kebab", 120.0),
    ("22", "6", "Lamb Chops", "Charcoal grilled lamb chops", 420.0),
    ("23", "7", "Chicken Pulao", "Rice cooked with chicken and spices", 250.0),
    ("32", "10", "Plain Naan", "Traditional Pakistani flatbread", 20.0),
    ("33", "10", "Tandoori Roti", "Whole wheat naan bread", 15.0),
    ("34", "10", "Khameeri Roti", "Traditional leavened naan bread", 30.0),
    ("35", "11", "Mixed Vegetables", "Vegetable mix curry", 200.0),
    ("36", "12", "Halwa", "Traditional Pakistani semolina sweet", 80.0),
    ("37", "12", "Kheer", "Rice pudding", 120.0),
];

pub fn seed_categories() -> Vec<MenuCategory> {
    CATEGORIES
        .iter()
        .map(|(id, name)| MenuCategory::new(*id, *name))
        .collect()
}

pub fn seed_items() -> Vec<MenuItem> {
    ITEMS
        .iter()
        .map(|(id, category_id, name, description, price)| {
            MenuItem::new(*id, *category_id, *name, *description, *price)
        })
        .collect()
}
