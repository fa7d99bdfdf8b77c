//! Category-diverse random selection of places.
//!
//! Given every known place, [`recommend`] picks at most `count` of them such
//! that no two share a category. Categories are drawn uniformly without
//! replacement, then a place is drawn uniformly within each chosen category and
//! finally one of that place's menus, if it has any.

use crate::modules::place::repository::{Category, Place, PlaceSummary};
use rand::{seq::IndexedRandom, Rng};
use serde::Serialize;
use std::collections::BTreeMap;

pub trait Categorized {
    fn category(&self) -> Category;
}

impl Categorized for Place {
    fn category(&self) -> Category {
        self.category
    }
}

impl Categorized for PlaceSummary {
    fn category(&self) -> Category {
        self.place.category
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Recommendation<P, M> {
    pub place: P,
    pub menu: Option<M>,
    pub category: Category,
}

pub fn recommend<R, P, M, F>(
    rng: &mut R,
    count: usize,
    places: &[P],
    mut menus_for: F,
) -> Vec<Recommendation<P, M>>
where
    R: Rng + ?Sized,
    P: Categorized + Clone,
    M: Clone,
    F: FnMut(&P) -> Vec<M>,
{
    if count == 0 || places.is_empty() {
        return Vec::new();
    }

    // ordered so a seeded rng always sees the same groups
    let groups = places
        .iter()
        .fold(BTreeMap::<Category, Vec<&P>>::new(), |mut groups, place| {
            groups.entry(place.category()).or_default().push(place);
            groups
        })
        .into_iter()
        .collect::<Vec<_>>();

    let chosen = groups
        .choose_multiple(rng, count.min(groups.len()))
        .collect::<Vec<_>>();

    chosen
        .into_iter()
        .filter_map(|(category, members)| {
            let place = *members.choose(rng)?;
            let menu = menus_for(place).choose(rng).cloned();

            Some(Recommendation {
                place: place.clone(),
                menu,
                category: *category,
            })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::modules::menu::repository::Menu;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::{HashMap, HashSet};

    fn place(id: i64, category: Category) -> Place {
        Place {
            id,
            name: format!("place {}", id),
            category,
            distance_note: None,
            address: None,
            hero_image_url: None,
            budget_range: None,
        }
    }

    fn menu(id: i64, place_id: i64) -> Menu {
        Menu {
            id,
            place_id,
            name: format!("menu {}", id),
            price: Some(9000),
        }
    }

    fn no_menus(_: &Place) -> Vec<Menu> {
        Vec::new()
    }

    fn sample_places() -> Vec<Place> {
        vec![
            place(1, Category::Korean),
            place(2, Category::Korean),
            place(3, Category::Cafe),
            place(4, Category::Japanese),
            place(5, Category::Japanese),
            place(6, Category::Chinese),
            place(7, Category::FastFood),
        ]
    }

    #[test]
    fn result_length_is_bounded_by_distinct_categories() {
        let mut rng = StdRng::seed_from_u64(7);
        let places = sample_places();

        for count in 0..=10 {
            let result = recommend(&mut rng, count, &places, no_menus);
            assert_eq!(result.len(), count.min(5));
        }
    }

    #[test]
    fn categories_never_repeat() {
        let mut rng = StdRng::seed_from_u64(11);
        let places = sample_places();

        for _ in 0..200 {
            let result = recommend(&mut rng, 5, &places, no_menus);
            let categories = result
                .iter()
                .map(|entry| entry.category)
                .collect::<HashSet<_>>();

            assert_eq!(categories.len(), result.len());
        }
    }

    #[test]
    fn entries_report_the_category_of_their_place() {
        let mut rng = StdRng::seed_from_u64(3);

        for entry in recommend(&mut rng, 10, &sample_places(), no_menus) {
            assert_eq!(entry.place.category, entry.category);
        }
    }

    #[test]
    fn menus_belong_to_the_chosen_place() {
        let mut rng = StdRng::seed_from_u64(5);
        let places = sample_places();
        let menus = places
            .iter()
            .filter(|place| place.id != 3)
            .flat_map(|place| (0..3).map(move |n| menu(place.id * 10 + n, place.id)))
            .fold(HashMap::<i64, Vec<Menu>>::new(), |mut menus, menu| {
                menus.entry(menu.place_id).or_default().push(menu);
                menus
            });

        for _ in 0..100 {
            for entry in recommend(&mut rng, 5, &places, |place: &Place| {
                menus.get(&place.id).cloned().unwrap_or_default()
            }) {
                match entry.menu {
                    Some(menu) => assert_eq!(menu.place_id, entry.place.id),
                    None => assert_eq!(entry.place.id, 3),
                }
            }
        }
    }

    #[test]
    fn empty_inputs_give_empty_results() {
        let mut rng = StdRng::seed_from_u64(1);
        let nothing: Vec<Place> = Vec::new();

        assert!(recommend(&mut rng, 3, &nothing, no_menus).is_empty());
        assert!(recommend(&mut rng, 0, &sample_places(), no_menus).is_empty());
    }

    #[test]
    fn never_picks_two_places_of_the_same_category() {
        let mut rng = StdRng::seed_from_u64(42);
        let places = vec![
            place(1, Category::Korean),
            place(2, Category::Korean),
            place(3, Category::Cafe),
        ];

        for _ in 0..100 {
            let result = recommend(&mut rng, 2, &places, no_menus);
            assert_eq!(result.len(), 2);

            let korean = result
                .iter()
                .find(|entry| entry.category == Category::Korean)
                .unwrap();
            let cafe = result
                .iter()
                .find(|entry| entry.category == Category::Cafe)
                .unwrap();

            assert!([1, 2].contains(&korean.place.id));
            assert_eq!(cafe.place.id, 3);
        }
    }

    #[test]
    fn single_category_without_menus_truncates_to_one_entry() {
        let mut rng = StdRng::seed_from_u64(9);
        let places = vec![place(1, Category::Japanese)];

        assert_eq!(
            recommend(&mut rng, 3, &places, no_menus),
            vec![Recommendation {
                place: place(1, Category::Japanese),
                menu: None,
                category: Category::Japanese,
            }]
        );
    }

    #[test]
    fn categories_are_chosen_with_roughly_equal_frequency() {
        let mut rng = StdRng::seed_from_u64(2024);
        let places = vec![
            place(1, Category::Korean),
            place(2, Category::Korean),
            place(3, Category::Korean),
            place(4, Category::Cafe),
            place(5, Category::Western),
            place(6, Category::Other),
        ];
        let mut picks = HashMap::<Category, usize>::new();

        for _ in 0..4000 {
            for entry in recommend(&mut rng, 2, &places, no_menus) {
                *picks.entry(entry.category).or_default() += 1;
            }
        }

        // 8000 picks over 4 categories
        assert_eq!(picks.len(), 4);
        for (category, picked) in picks {
            assert!(
                (1700..=2300).contains(&picked),
                "{} was picked {} times",
                category,
                picked
            );
        }
    }

    #[test]
    fn places_are_chosen_uniformly_within_a_category() {
        let mut rng = StdRng::seed_from_u64(77);
        let places = vec![
            place(1, Category::Korean),
            place(2, Category::Korean),
            place(3, Category::Korean),
        ];
        let mut picks = HashMap::<i64, usize>::new();

        for _ in 0..3000 {
            for entry in recommend(&mut rng, 1, &places, no_menus) {
                *picks.entry(entry.place.id).or_default() += 1;
            }
        }

        for id in 1..=3 {
            let picked = picks.get(&id).copied().unwrap_or_default();
            assert!((800..=1200).contains(&picked), "{} picked {}", id, picked);
        }
    }
}
