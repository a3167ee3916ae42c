/// Class labels of the bundled 20-class detector, indexed by class id.
pub const LABELS: [&str; 20] = [
    "Plane", "Bicycle", "Bird", "Boat", //
    "Bottle", "Bus", "Car", "Cat", //
    "Chair", "Cow", "Table", "Dog", //
    "Horse", "Motorbike", "Person", "Plant", //
    "Sheep", "Sofa", "Train", "TV",
];

/// Label for `class_index`, or `"Unknown"` when out of range.
pub fn label_for(class_index: usize) -> &'static str {
    LABELS.get(class_index).copied().unwrap_or("Unknown")
}
