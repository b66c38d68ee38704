//! Pipeline execution on top of SeaORM
//!
//! A `Pipeline` is compiled into one SELECT: match stages become WHERE
//! predicates and a trailing group stage becomes GROUP BY with aggregate
//! columns, so filtering, counting and averaging all happen in the store.

use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter, QuerySelect,
    Select, Value,
};

use crate::domain::{
    Accumulator, Comparison, CourseField, Criteria, DomainError, FieldValue, GroupStage, Pipeline,
    Stage,
};
use crate::models::course::{self, Column, Entity as CourseEntity};
use crate::models::{Course, ResponseDto};

/// Runs aggregation pipelines against the courses collection
#[derive(Clone)]
pub struct CourseAggregator {
    db: DatabaseConnection,
}

impl CourseAggregator {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Execute `pipeline` and map every resulting row into `T`.
    ///
    /// Match-only pipelines yield full course rows (`course::Model`);
    /// grouped pipelines yield one row per group, with columns named after
    /// the group key and the accumulator aliases.
    pub async fn aggregate<T>(&self, pipeline: &Pipeline) -> Result<Vec<T>, DomainError>
    where
        T: FromQueryResult + Send + Sync,
    {
        let query = compile(pipeline)?;
        Ok(query.into_model::<T>().all(&self.db).await?)
    }

    /// `[instructor == instructor] -> [course_fee > min_fee]`
    pub async fn filter_courses(
        &self,
        instructor: &str,
        min_fee: f64,
    ) -> Result<Vec<Course>, DomainError> {
        let pipeline = Pipeline::new()
            .filter(Criteria::field(CourseField::Instructor).is(instructor))
            .filter(Criteria::field(CourseField::CourseFee).gt(min_fee));

        let rows: Vec<course::Model> = self.aggregate(&pipeline).await?;
        Ok(rows.into_iter().map(Course::from).collect())
    }

    /// `[instructor == instructor] -> [group by instructor: count, avg(course_fee)]`
    ///
    /// The match fixes the group key, so there is at most one row.
    pub async fn group_by_instructor(
        &self,
        instructor: &str,
    ) -> Result<Option<ResponseDto>, DomainError> {
        let pipeline = Pipeline::new()
            .filter(Criteria::field(CourseField::Instructor).is(instructor))
            .group(
                GroupStage::by(CourseField::Instructor)
                    .count("total_courses")
                    .avg(CourseField::CourseFee, "average_course_fee"),
            );

        let mut rows: Vec<ResponseDto> = self.aggregate(&pipeline).await?;
        if rows.len() > 1 {
            return Err(DomainError::Internal(format!(
                "expected a unique aggregation result, got {} rows",
                rows.len()
            )));
        }

        Ok(rows.pop())
    }
}

fn compile(pipeline: &Pipeline) -> Result<Select<CourseEntity>, DomainError> {
    pipeline.validate()?;

    let mut query = CourseEntity::find();
    for stage in pipeline.stages() {
        query = match stage {
            Stage::Match(criteria) => query.filter(predicate(criteria)),
            Stage::Group(group) => grouped(query, group),
        };
    }

    Ok(query)
}

fn column(field: CourseField) -> Column {
    match field {
        CourseField::CourseId => Column::CourseId,
        CourseField::CourseName => Column::CourseName,
        CourseField::Instructor => Column::Instructor,
        CourseField::CourseFee => Column::CourseFee,
        CourseField::Duration => Column::Duration,
        CourseField::IsCourseLive => Column::IsCourseLive,
    }
}

fn value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(text) => text.clone().into(),
        FieldValue::Number(number) => (*number).into(),
        FieldValue::Bool(flag) => (*flag).into(),
    }
}

fn predicate(criteria: &Criteria) -> SimpleExpr {
    let column = column(criteria.field);
    let value = value(&criteria.value);

    match criteria.comparison {
        Comparison::Eq => column.eq(value),
        Comparison::Ne => column.ne(value),
        Comparison::Gt => column.gt(value),
        Comparison::Gte => column.gte(value),
        Comparison::Lt => column.lt(value),
        Comparison::Lte => column.lte(value),
    }
}

fn accumulator(accumulator: &Accumulator) -> SimpleExpr {
    match *accumulator {
        Accumulator::Count => Func::count(Expr::col(Column::CourseId)).into(),
        Accumulator::Avg(field) => Func::avg(Expr::col(column(field))).into(),
        Accumulator::Sum(field) => Func::sum(Expr::col(column(field))).into(),
        Accumulator::Min(field) => Func::min(Expr::col(column(field))).into(),
        Accumulator::Max(field) => Func::max(Expr::col(column(field))).into(),
    }
}

fn grouped(query: Select<CourseEntity>, group: &GroupStage) -> Select<CourseEntity> {
    let key = column(group.key);

    let mut query = query
        .select_only()
        .column_as(key, group.key.name())
        .group_by(key);

    for (alias, acc) in &group.accumulators {
        query = query.column_as(accumulator(acc), alias.as_str());
    }

    query
}
