//! Aggregation pipeline descriptions
//!
//! A pipeline is an ordered list of stages run by the store: match stages
//! narrow the working set one predicate at a time, and an optional final
//! group stage partitions what is left by a key field and computes
//! per-group accumulators. Execution lives in the infrastructure layer.

use super::DomainError;

/// Course fields a stage can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    CourseId,
    CourseName,
    Instructor,
    CourseFee,
    Duration,
    IsCourseLive,
}

impl CourseField {
    /// Name of the field in stored records and in group output rows
    pub fn name(self) -> &'static str {
        match self {
            CourseField::CourseId => "course_id",
            CourseField::CourseName => "course_name",
            CourseField::Instructor => "instructor",
            CourseField::CourseFee => "course_fee",
            CourseField::Duration => "duration",
            CourseField::IsCourseLive => "is_course_live",
        }
    }
}

/// Literal a field is compared against
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
}

/// A single field predicate, e.g. `instructor == "A"` or `course_fee > 100`
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    pub field: CourseField,
    pub comparison: Comparison,
    pub value: FieldValue,
}

impl Criteria {
    /// Start a predicate on `field`:
    /// `Criteria::field(CourseField::CourseFee).gt(3000.0)`
    pub fn field(field: CourseField) -> CriteriaBuilder {
        CriteriaBuilder { field }
    }
}

pub struct CriteriaBuilder {
    field: CourseField,
}

impl CriteriaBuilder {
    fn compare(self, comparison: Comparison, value: impl Into<FieldValue>) -> Criteria {
        Criteria {
            field: self.field,
            comparison,
            value: value.into(),
        }
    }

    pub fn is(self, value: impl Into<FieldValue>) -> Criteria {
        self.compare(Comparison::Eq, value)
    }

    pub fn ne(self, value: impl Into<FieldValue>) -> Criteria {
        self.compare(Comparison::Ne, value)
    }

    pub fn gt(self, value: impl Into<FieldValue>) -> Criteria {
        self.compare(Comparison::Gt, value)
    }

    pub fn gte(self, value: impl Into<FieldValue>) -> Criteria {
        self.compare(Comparison::Gte, value)
    }

    pub fn lt(self, value: impl Into<FieldValue>) -> Criteria {
        self.compare(Comparison::Lt, value)
    }

    pub fn lte(self, value: impl Into<FieldValue>) -> Criteria {
        self.compare(Comparison::Lte, value)
    }
}

/// Per-group computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accumulator {
    Count,
    Avg(CourseField),
    Sum(CourseField),
    Min(CourseField),
    Max(CourseField),
}

/// Groups the working set by `key`; each output row holds the key under the
/// key field's name and every accumulator under its alias.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStage {
    pub key: CourseField,
    pub accumulators: Vec<(String, Accumulator)>,
}

impl GroupStage {
    pub fn by(key: CourseField) -> Self {
        Self {
            key,
            accumulators: Vec::new(),
        }
    }

    fn accumulate(mut self, alias: &str, accumulator: Accumulator) -> Self {
        self.accumulators.push((alias.to_string(), accumulator));
        self
    }

    pub fn count(self, alias: &str) -> Self {
        self.accumulate(alias, Accumulator::Count)
    }

    pub fn avg(self, field: CourseField, alias: &str) -> Self {
        self.accumulate(alias, Accumulator::Avg(field))
    }

    pub fn sum(self, field: CourseField, alias: &str) -> Self {
        self.accumulate(alias, Accumulator::Sum(field))
    }

    pub fn min(self, field: CourseField, alias: &str) -> Self {
        self.accumulate(alias, Accumulator::Min(field))
    }

    pub fn max(self, field: CourseField, alias: &str) -> Self {
        self.accumulate(alias, Accumulator::Max(field))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    Match(Criteria),
    Group(GroupStage),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a match stage
    pub fn filter(mut self, criteria: Criteria) -> Self {
        self.stages.push(Stage::Match(criteria));
        self
    }

    /// Append a group stage
    pub fn group(mut self, group: GroupStage) -> Self {
        self.stages.push(Stage::Group(group));
        self
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Whether the pipeline ends in a group stage
    pub fn is_grouped(&self) -> bool {
        matches!(self.stages.last(), Some(Stage::Group(_)))
    }

    /// Only a single, trailing group stage can be pushed down to the store.
    pub fn validate(&self) -> Result<(), DomainError> {
        let groups = self
            .stages
            .iter()
            .filter(|stage| matches!(stage, Stage::Group(_)))
            .count();

        if groups > 1 {
            return Err(DomainError::Validation(format!(
                "pipeline has {} group stages, at most one is supported",
                groups
            )));
        }

        if groups == 1 && !self.is_grouped() {
            return Err(DomainError::Validation(
                "group stage must be the last stage of the pipeline".to_string(),
            ));
        }

        if let Some(Stage::Group(group)) = self.stages.last()
            && group.accumulators.is_empty()
        {
            return Err(DomainError::Validation(
                "group stage needs at least one accumulator".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_instructor() -> GroupStage {
        GroupStage::by(CourseField::Instructor).count("total_courses")
    }

    #[test]
    fn test_match_only_pipeline_is_valid() {
        let pipeline = Pipeline::new()
            .filter(Criteria::field(CourseField::Instructor).is("A"))
            .filter(Criteria::field(CourseField::CourseFee).gt(100.0));

        assert!(pipeline.validate().is_ok());
        assert!(!pipeline.is_grouped());
        assert_eq!(pipeline.stages().len(), 2);
    }

    #[test]
    fn test_trailing_group_is_valid() {
        let pipeline = Pipeline::new()
            .filter(Criteria::field(CourseField::Instructor).is("A"))
            .group(by_instructor().avg(CourseField::CourseFee, "average_course_fee"));

        assert!(pipeline.validate().is_ok());
        assert!(pipeline.is_grouped());
    }

    #[test]
    fn test_group_before_match_is_rejected() {
        let pipeline = Pipeline::new()
            .group(by_instructor())
            .filter(Criteria::field(CourseField::CourseFee).gt(100.0));

        assert!(matches!(
            pipeline.validate(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_two_groups_are_rejected() {
        let pipeline = Pipeline::new().group(by_instructor()).group(by_instructor());

        assert!(matches!(
            pipeline.validate(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_group_without_accumulators_is_rejected() {
        let pipeline = Pipeline::new().group(GroupStage::by(CourseField::Instructor));

        assert!(matches!(
            pipeline.validate(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_criteria_builder() {
        let criteria = Criteria::field(CourseField::CourseFee).gt(3000.0);

        assert_eq!(criteria.field, CourseField::CourseFee);
        assert_eq!(criteria.comparison, Comparison::Gt);
        assert_eq!(criteria.value, FieldValue::Number(3000.0));

        let criteria = Criteria::field(CourseField::Instructor).is("Sudarshan Shah");
        assert_eq!(criteria.comparison, Comparison::Eq);
        assert_eq!(criteria.value, FieldValue::Text("Sudarshan Shah".to_string()));
    }
}
