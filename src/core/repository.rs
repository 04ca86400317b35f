use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;

pub trait Repository<Entity: Identifiable> {
    // create an entity
    fn create(&mut self, entity: Entity) -> LibraryResult<usize>;

    // updates an entity in place
    fn update(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: Entity::Id) -> LibraryResult<&Entity>;

    // delete an entity, handing back the removed record
    fn delete(&mut self, id: Entity::Id) -> LibraryResult<Entity>;

    // entities matching the predicate, in insertion order
    fn query(&self, predicate: &dyn Fn(&Entity) -> bool) -> Vec<&Entity>;

    fn count(&self) -> usize;
}
