use crate::entity::Entity;
use crate::errors::DomainError;
use crate::report::EntityReport;

/// Entities sharing one category tag, in registration order.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub entities: Vec<Entity>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entities: Vec::new(),
        }
    }

    /// Append-only; duplicates are the caller's problem.
    pub fn register(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn ready_count(&self) -> usize {
        self.entities
            .iter()
            .filter(|entity| entity.ipv6_ready == Some(true))
            .count()
    }

    pub fn total_count(&self) -> usize {
        self.entities.len()
    }

    /// Integer percentage, rounded half away from zero. Fails on an empty
    /// category rather than dividing by zero.
    pub fn ready_percentage(&self) -> Result<String, DomainError> {
        if self.entities.is_empty() {
            return Err(DomainError::EmptyCategory(self.name.clone()));
        }

        let ratio = self.ready_count() as f64 / self.total_count() as f64;
        Ok(format!("{}%", (ratio * 100.0).round() as u32))
    }

    pub fn report(&self) -> Vec<EntityReport> {
        self.entities.iter().map(Entity::report).collect()
    }
}
