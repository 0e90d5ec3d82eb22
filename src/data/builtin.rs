use crate::data::fruit::{Fruit, FruitSample};

/// Deterministic fruit dataset: `per_class` samples around one center per
/// class on a 0-10 sweetness/color scale.
///
/// Apples are sweet and red (low color), bananas are mildly sweet and yellow,
/// oranges sit in between on both axes.
pub fn builtin_fruit(per_class: usize) -> Vec<FruitSample> {
    let centers = [
        (Fruit::Apple, 8.0, 2.0),
        (Fruit::Banana, 4.0, 8.0),
        (Fruit::Orange, 6.5, 5.0),
    ];
    let mut samples = Vec::with_capacity(per_class * centers.len());
    for i in 0..per_class {
        for (k, &(fruit, cx, cy)) in centers.iter().enumerate() {
            // Deterministic "pseudo-random" spread using sin/cos of index.
            let n = (i * centers.len() + k) as f64;
            let angle = n * 2.399;
            let r = 0.9 * (n * 0.31).sin().abs();
            let sweetness = (cx + r * angle.cos()).clamp(0.0, 10.0);
            let color = (cy + r * angle.sin()).clamp(0.0, 10.0);
            samples.push(FruitSample::new(sweetness, color, fruit));
        }
    }
    samples
}

/// Scales both features from the 0-10 range into 0-1.
pub fn normalized(samples: &[FruitSample]) -> Vec<FruitSample> {
    samples.iter()
        .map(|s| FruitSample::new(s.sweetness / 10.0, s.color / 10.0, s.fruit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_balanced() {
        let data = builtin_fruit(10);
        assert_eq!(data.len(), 30);
        for fruit in Fruit::ALL {
            assert_eq!(data.iter().filter(|s| s.fruit == fruit).count(), 10);
        }
    }

    #[test]
    fn normalized_features_are_in_unit_range() {
        let data = normalized(&builtin_fruit(20));
        assert!(data.iter().all(|s| (0.0..=1.0).contains(&s.sweetness) && (0.0..=1.0).contains(&s.color)));
    }
}
