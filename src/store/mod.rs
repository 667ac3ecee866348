//! In-memory entity store.
//!
//! Sole authority over student, course, and enrollment state. Every
//! uniqueness, capacity, and referential-integrity rule is enforced here;
//! the HTTP layer only translates outcomes into status codes.
//!
//! The store is constructed per process (or per test) and injected
//! explicitly. Under concurrent request handling the whole store sits
//! behind a single lock so an invariant check and its mutation are
//! observed as one atomic unit.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::COURSE_CAPACITY;
use crate::domain::{Course, CreateCourse, CreateStudent, Student, UpdateCourse, UpdateStudent};
use crate::errors::{AppError, AppResult, Entity};

/// Shared handle to the store.
///
/// Handlers hold the lock for the full check-then-mutate sequence of a
/// single operation and never across an await point.
pub type SharedStore = Arc<Mutex<EntityStore>>;

/// The in-memory entity store.
///
/// Ids are issued per collection, monotonically increasing from 1, and are
/// never reused within the process lifetime: deleting an entity does not
/// free its id.
#[derive(Debug, Default)]
pub struct EntityStore {
    students: Vec<Student>,
    courses: Vec<Course>,
    /// (student id, course id) membership pairs
    enrollments: Vec<(u64, u64)>,
    /// Last issued student id
    next_student_id: u64,
    /// Last issued course id
    next_course_id: u64,
}

/// Treat an absent or empty string as missing.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl EntityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store behind the shared lock
    pub fn shared() -> SharedStore {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Create a store pre-loaded with the seed fixture behind the shared lock
    pub fn seeded() -> SharedStore {
        let mut store = Self::new();
        store.seed();
        Arc::new(Mutex::new(store))
    }

    // =========================================================================
    // Students
    // =========================================================================

    /// All students in insertion order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Exact-match lookup by id; absence is a normal outcome
    pub fn student(&self, id: u64) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Create a student, assigning the next id.
    ///
    /// Requires non-empty `name` and `email`; the email must not be used by
    /// any other student (case-sensitive exact match).
    pub fn create_student(&mut self, req: CreateStudent) -> AppResult<Student> {
        let name = non_empty(req.name).ok_or(AppError::MissingField(Entity::Student))?;
        let email = non_empty(req.email).ok_or(AppError::MissingField(Entity::Student))?;
        if self.students.iter().any(|s| s.email == email) {
            return Err(AppError::DuplicateEmail);
        }

        self.next_student_id += 1;
        let student = Student::new(self.next_student_id, name, email);
        self.students.push(student.clone());
        Ok(student)
    }

    /// Apply a partial update to a student.
    ///
    /// Only supplied non-empty fields overwrite. Either every supplied field
    /// is applied or none is.
    pub fn update_student(&mut self, id: u64, update: UpdateStudent) -> AppResult<Student> {
        let idx = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or(AppError::NotFound(Entity::Student))?;

        let name = non_empty(update.name);
        let email = non_empty(update.email);
        if let Some(email) = &email {
            if self.students.iter().any(|s| s.email == *email && s.id != id) {
                return Err(AppError::DuplicateEmail);
            }
        }

        let student = &mut self.students[idx];
        if let Some(name) = name {
            student.name = name;
        }
        if let Some(email) = email {
            student.email = email;
        }
        Ok(student.clone())
    }

    /// Remove a student.
    ///
    /// Rejected with [`AppError::Blocked`] while the student is enrolled in
    /// at least one course.
    pub fn remove_student(&mut self, id: u64) -> AppResult<()> {
        let idx = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or(AppError::NotFound(Entity::Student))?;
        if self.enrollments.iter().any(|&(sid, _)| sid == id) {
            return Err(AppError::Blocked(Entity::Student));
        }

        self.students.remove(idx);
        Ok(())
    }

    // =========================================================================
    // Courses
    // =========================================================================

    /// All courses in insertion order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Exact-match lookup by id; absence is a normal outcome
    pub fn course(&self, id: u64) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Create a course, assigning the next id.
    ///
    /// Requires non-empty `title` and `teacher`; the title must not be used
    /// by any other course (case-sensitive exact match).
    pub fn create_course(&mut self, req: CreateCourse) -> AppResult<Course> {
        let title = non_empty(req.title).ok_or(AppError::MissingField(Entity::Course))?;
        let teacher = non_empty(req.teacher).ok_or(AppError::MissingField(Entity::Course))?;
        if self.courses.iter().any(|c| c.title == title) {
            return Err(AppError::DuplicateTitle);
        }

        self.next_course_id += 1;
        let course = Course::new(self.next_course_id, title, teacher);
        self.courses.push(course.clone());
        Ok(course)
    }

    /// Apply a partial update to a course.
    ///
    /// Only supplied non-empty fields overwrite. Either every supplied field
    /// is applied or none is.
    pub fn update_course(&mut self, id: u64, update: UpdateCourse) -> AppResult<Course> {
        let idx = self
            .courses
            .iter()
            .position(|c| c.id == id)
            .ok_or(AppError::NotFound(Entity::Course))?;

        let title = non_empty(update.title);
        let teacher = non_empty(update.teacher);
        if let Some(title) = &title {
            if self.courses.iter().any(|c| c.title == *title && c.id != id) {
                return Err(AppError::DuplicateTitle);
            }
        }

        let course = &mut self.courses[idx];
        if let Some(title) = title {
            course.title = title;
        }
        if let Some(teacher) = teacher {
            course.teacher = teacher;
        }
        Ok(course.clone())
    }

    /// Remove a course.
    ///
    /// Rejected with [`AppError::Blocked`] while at least one student is
    /// enrolled in it.
    pub fn remove_course(&mut self, id: u64) -> AppResult<()> {
        let idx = self
            .courses
            .iter()
            .position(|c| c.id == id)
            .ok_or(AppError::NotFound(Entity::Course))?;
        if self.enrollments.iter().any(|&(_, cid)| cid == id) {
            return Err(AppError::Blocked(Entity::Course));
        }

        self.courses.remove(idx);
        Ok(())
    }

    // =========================================================================
    // Enrollment
    // =========================================================================

    /// Enroll a student in a course.
    ///
    /// Fails when either id does not resolve, or when the course already
    /// holds [`COURSE_CAPACITY`] students. Enrolling an already-enrolled
    /// pair is an idempotent no-op.
    pub fn enroll(&mut self, student_id: u64, course_id: u64) -> AppResult<()> {
        if self.student(student_id).is_none() {
            return Err(AppError::NotFound(Entity::Student));
        }
        if self.course(course_id).is_none() {
            return Err(AppError::NotFound(Entity::Course));
        }
        if self.enrollments.contains(&(student_id, course_id)) {
            return Ok(());
        }
        if self.enrolled_count(course_id) >= COURSE_CAPACITY {
            return Err(AppError::CourseFull);
        }

        self.enrollments.push((student_id, course_id));
        Ok(())
    }

    /// Every course the given student is enrolled in, in course insertion
    /// order
    pub fn courses_for_student(&self, student_id: u64) -> Vec<Course> {
        self.courses
            .iter()
            .filter(|c| self.enrollments.contains(&(student_id, c.id)))
            .cloned()
            .collect()
    }

    /// Every student enrolled in the given course, in student insertion
    /// order
    pub fn students_in_course(&self, course_id: u64) -> Vec<Student> {
        self.students
            .iter()
            .filter(|s| self.enrollments.contains(&(s.id, course_id)))
            .cloned()
            .collect()
    }

    fn enrolled_count(&self, course_id: u64) -> usize {
        self.enrollments
            .iter()
            .filter(|&&(_, cid)| cid == course_id)
            .count()
    }

    // =========================================================================
    // Test fixtures
    // =========================================================================

    /// Clear all collections, all enrollments, and the id counters.
    pub fn reset(&mut self) {
        self.students.clear();
        self.courses.clear();
        self.enrollments.clear();
        self.next_student_id = 0;
        self.next_course_id = 0;
    }

    /// Load the deterministic baseline fixture: three students (Alice first,
    /// id 1) and one course. Intended for use on a fresh or just-reset
    /// store.
    pub fn seed(&mut self) {
        for (name, email) in [
            ("Alice", "alice@example.com"),
            ("Bob", "bob@example.com"),
            ("Charlie", "charlie@example.com"),
        ] {
            self.next_student_id += 1;
            self.students
                .push(Student::new(self.next_student_id, name.into(), email.into()));
        }

        self.next_course_id += 1;
        self.courses.push(Course::new(
            self.next_course_id,
            "Math".into(),
            "Mr. Smith".into(),
        ));
    }
}
