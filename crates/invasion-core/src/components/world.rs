//! World Graph
//!
//! Arena of cities keyed by name. Roads are stored as [`CityId`] lookups, so
//! the cyclic neighbor graph carries no reference cycles.

use std::collections::BTreeMap;

use super::city::{City, CityId, Direction};

/// The whole map. Cities are only ever added; destruction is a flag.
#[derive(Debug, Clone, Default)]
pub struct World {
    cities: Vec<City>,
    /// Sorted, so name-ordered enumeration is deterministic
    by_name: BTreeMap<String, CityId>,
    /// Cities in the order they headed a line of the world description
    declared: Vec<CityId>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the city called `name`
    pub fn add_city(&mut self, name: &str) -> CityId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = CityId(self.cities.len());
        self.cities.push(City::new(name));
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Record that `id` headed a line of the world description
    pub fn declare(&mut self, id: CityId) {
        self.declared.push(id);
    }

    pub fn declared(&self) -> &[CityId] {
        &self.declared
    }

    /// Lay a two-way road: `from.direction = to` and `to.opposite = from`.
    ///
    /// Any road previously occupying either slot is detached from both ends
    /// first, so every road stays reciprocal.
    pub fn connect(&mut self, from: CityId, direction: Direction, to: CityId) {
        let back = direction.opposite();
        if self.city(from).is_none() || self.city(to).is_none() {
            return;
        }

        if let Some(old) = self.cities[from.0].neighbor(direction) {
            self.detach(old, back, from);
        }
        if let Some(old) = self.cities[to.0].neighbor(back) {
            self.detach(old, direction, to);
        }

        self.cities[from.0].set_neighbor(direction, Some(to));
        self.cities[to.0].set_neighbor(back, Some(from));
    }

    /// Clear `city.direction` if it still points at `expected`
    fn detach(&mut self, city: CityId, direction: Direction, expected: CityId) {
        if let Some(c) = self.cities.get_mut(city.0) {
            if c.neighbor(direction) == Some(expected) {
                c.set_neighbor(direction, None);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<CityId> {
        self.by_name.get(name).copied()
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.get(id.0)
    }

    pub fn city_mut(&mut self, id: CityId) -> Option<&mut City> {
        self.cities.get_mut(id.0)
    }

    pub fn city_by_name(&self, name: &str) -> Option<&City> {
        self.get(name).and_then(|id| self.city(id))
    }

    /// All cities in name order
    pub fn cities(&self) -> impl Iterator<Item = (CityId, &City)> {
        self.by_name.values().map(move |&id| (id, &self.cities[id.0]))
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn is_live(&self, id: CityId) -> bool {
        self.city(id).map(|c| !c.is_destroyed()).unwrap_or(false)
    }

    /// Every city not yet destroyed, in name order
    pub fn live_cities(&self) -> Vec<CityId> {
        self.by_name
            .values()
            .copied()
            .filter(|&id| self.is_live(id))
            .collect()
    }

    /// Roads out of `id` that lead to a live city, in [`Direction::MOVE_ORDER`]
    pub fn live_neighbors(&self, id: CityId) -> Vec<(Direction, CityId)> {
        let Some(city) = self.city(id) else {
            return Vec::new();
        };
        Direction::MOVE_ORDER
            .iter()
            .filter_map(|&direction| {
                city.neighbor(direction)
                    .filter(|&n| self.is_live(n))
                    .map(|n| (direction, n))
            })
            .collect()
    }

    /// One line per city, name ordered
    pub fn describe(&self) -> String {
        self.cities()
            .map(|(_, city)| format!("{}\n", city.describe(self)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_symmetric(world: &World) {
        for (id, city) in world.cities() {
            for direction in Direction::MOVE_ORDER {
                if let Some(n) = city.neighbor(direction) {
                    let other = world.city(n).unwrap();
                    assert_eq!(
                        other.neighbor(direction.opposite()),
                        Some(id),
                        "{} {} -> {} is not reciprocal",
                        city.name(),
                        direction,
                        other.name()
                    );
                }
            }
        }
    }

    #[test]
    fn test_add_city_is_get_or_create() {
        let mut world = World::new();
        let a = world.add_city("Foo");
        let b = world.add_city("Foo");

        assert_eq!(a, b);
        assert_eq!(world.len(), 1);
        assert_eq!(world.get("Foo"), Some(a));
        assert_eq!(world.get("Bar"), None);
    }

    #[test]
    fn test_connect_is_reciprocal() {
        let mut world = World::new();
        let foo = world.add_city("Foo");
        let bar = world.add_city("Bar");
        world.connect(foo, Direction::North, bar);

        assert_eq!(world.city(foo).unwrap().neighbor(Direction::North), Some(bar));
        assert_eq!(world.city(bar).unwrap().neighbor(Direction::South), Some(foo));
        assert_symmetric(&world);
    }

    #[test]
    fn test_reconnect_detaches_stale_roads() {
        let mut world = World::new();
        let foo = world.add_city("Foo");
        let bar = world.add_city("Bar");
        let baz = world.add_city("Baz");

        world.connect(foo, Direction::North, bar);
        world.connect(foo, Direction::North, baz);

        assert_eq!(world.city(foo).unwrap().neighbor(Direction::North), Some(baz));
        assert_eq!(world.city(bar).unwrap().neighbor(Direction::South), None);
        assert_symmetric(&world);

        // Re-target from the other end
        let qux = world.add_city("Qux");
        world.connect(qux, Direction::South, foo);
        assert_eq!(world.city(foo).unwrap().neighbor(Direction::North), Some(qux));
        assert_eq!(world.city(baz).unwrap().neighbor(Direction::South), None);
        assert_symmetric(&world);
    }

    #[test]
    fn test_self_loop_is_symmetric() {
        let mut world = World::new();
        let foo = world.add_city("Foo");
        world.connect(foo, Direction::East, foo);

        assert_eq!(world.city(foo).unwrap().neighbor(Direction::East), Some(foo));
        assert_eq!(world.city(foo).unwrap().neighbor(Direction::West), Some(foo));
        assert_symmetric(&world);
    }

    #[test]
    fn test_live_cities_sorted_and_filtered() {
        let mut world = World::new();
        let zed = world.add_city("Zed");
        let abe = world.add_city("Abe");
        let mid = world.add_city("Mid");

        assert_eq!(world.live_cities(), vec![abe, mid, zed]);

        world.city_mut(mid).unwrap().destroy();
        assert_eq!(world.live_cities(), vec![abe, zed]);
        assert!(!world.is_live(mid));
    }

    #[test]
    fn test_live_neighbors_move_order() {
        let mut world = World::new();
        let hub = world.add_city("Hub");
        let n = world.add_city("N");
        let s = world.add_city("S");
        let e = world.add_city("E");
        let w = world.add_city("W");
        world.connect(hub, Direction::North, n);
        world.connect(hub, Direction::South, s);
        world.connect(hub, Direction::East, e);
        world.connect(hub, Direction::West, w);

        let dirs: Vec<Direction> = world.live_neighbors(hub).iter().map(|(d, _)| *d).collect();
        assert_eq!(dirs, Direction::MOVE_ORDER.to_vec());

        world.city_mut(e).unwrap().destroy();
        assert_eq!(
            world.live_neighbors(hub),
            vec![(Direction::West, w), (Direction::South, s), (Direction::North, n)]
        );
    }

    #[test]
    fn test_unknown_ids() {
        let world = World::new();
        assert!(world.city(CityId(3)).is_none());
        assert!(!world.is_live(CityId(3)));
        assert!(world.live_neighbors(CityId(3)).is_empty());
    }
}
