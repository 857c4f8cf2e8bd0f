use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use crate::errors::{DatabaseError, Error, Result};
use crate::goals::{
    Goal, GoalError, GoalFilters, GoalRepositoryTrait, GoalService, GoalServiceTrait, GoalUpdate,
    NewGoal,
};
use crate::tasks::{NewTask, Task, TaskFilters, TaskRepositoryTrait, TaskUpdate};

const OWNER: &str = "owner-1";

fn task(id: &str, points: i32, completed: bool) -> Task {
    Task {
        id: id.to_string(),
        owner_id: OWNER.to_string(),
        name: format!("task {}", id),
        points,
        completed,
        category_id: "cat-1".to_string(),
        created_at: Utc::now(),
    }
}

fn goal(id: &str, points_required: i32, achieved: bool) -> Goal {
    Goal {
        id: id.to_string(),
        owner_id: OWNER.to_string(),
        name: format!("goal {}", id),
        points_required,
        achieved,
        created_at: Utc::now(),
    }
}

struct MockTaskRepository {
    tasks: RwLock<Vec<Task>>,
}

impl MockTaskRepository {
    fn with_tasks(tasks: Vec<Task>) -> Arc<Self> {
        Arc::new(Self {
            tasks: RwLock::new(tasks),
        })
    }
}

#[async_trait]
impl TaskRepositoryTrait for MockTaskRepository {
    async fn list_tasks(&self, owner_id: &str, _filters: &TaskFilters) -> Result<Vec<Task>> {
        Ok(self
            .tasks
            .read()
            .unwrap()
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn get_task(&self, _owner_id: &str, _task_id: &str) -> Result<Task> {
        unimplemented!()
    }

    async fn insert_new_task(&self, _owner_id: &str, _new_task: NewTask) -> Result<Task> {
        unimplemented!()
    }

    async fn update_task(&self, _owner_id: &str, _task_update: TaskUpdate) -> Result<Task> {
        unimplemented!()
    }

    async fn set_completed(
        &self,
        _owner_id: &str,
        _task_id: &str,
        _completed: bool,
    ) -> Result<Task> {
        unimplemented!()
    }

    async fn delete_task(&self, _owner_id: &str, _task_id: &str) -> Result<usize> {
        unimplemented!()
    }

    async fn count_tasks_for_category(
        &self,
        _owner_id: &str,
        _category_id: &str,
    ) -> Result<usize> {
        unimplemented!()
    }
}

struct MockGoalRepository {
    goals: RwLock<Vec<Goal>>,
    fail_writes: bool,
}

impl MockGoalRepository {
    fn with_goals(goals: Vec<Goal>) -> Arc<Self> {
        Arc::new(Self {
            goals: RwLock::new(goals),
            fail_writes: false,
        })
    }

    fn failing_writes(goals: Vec<Goal>) -> Arc<Self> {
        Arc::new(Self {
            goals: RwLock::new(goals),
            fail_writes: true,
        })
    }

    fn snapshot(&self, goal_id: &str) -> Goal {
        self.goals
            .read()
            .unwrap()
            .iter()
            .find(|g| g.id == goal_id)
            .cloned()
            .unwrap()
    }
}

#[async_trait]
impl GoalRepositoryTrait for MockGoalRepository {
    async fn list_goals(&self, owner_id: &str, _filters: &GoalFilters) -> Result<Vec<Goal>> {
        Ok(self
            .goals
            .read()
            .unwrap()
            .iter()
            .filter(|g| g.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn get_goal(&self, owner_id: &str, goal_id: &str) -> Result<Goal> {
        self.goals
            .read()
            .unwrap()
            .iter()
            .find(|g| g.owner_id == owner_id && g.id == goal_id)
            .cloned()
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(goal_id.to_string())))
    }

    async fn insert_new_goal(&self, _owner_id: &str, _new_goal: NewGoal) -> Result<Goal> {
        unimplemented!()
    }

    async fn update_goal(&self, _owner_id: &str, _goal_update: GoalUpdate) -> Result<Goal> {
        unimplemented!()
    }

    async fn set_achieved(&self, owner_id: &str, goal_id: &str, achieved: bool) -> Result<Goal> {
        if self.fail_writes {
            return Err(Error::Database(DatabaseError::QueryFailed(
                "store unavailable".to_string(),
            )));
        }
        let mut goals = self.goals.write().unwrap();
        let goal = goals
            .iter_mut()
            .find(|g| g.owner_id == owner_id && g.id == goal_id)
            .ok_or_else(|| Error::Database(DatabaseError::NotFound(goal_id.to_string())))?;
        goal.achieved = achieved;
        Ok(goal.clone())
    }

    async fn delete_goal(&self, _owner_id: &str, _goal_id: &str) -> Result<usize> {
        unimplemented!()
    }
}

fn service(
    goal_repo: &Arc<MockGoalRepository>,
    task_repo: &Arc<MockTaskRepository>,
) -> GoalService<MockGoalRepository, MockTaskRepository> {
    GoalService::new(goal_repo.clone(), task_repo.clone())
}

#[tokio::test]
async fn marking_achieved_succeeds_when_points_cover_the_cost() {
    let task_repo = MockTaskRepository::with_tasks(vec![task("t1", 100, true)]);
    let goal_repo = MockGoalRepository::with_goals(vec![goal("g1", 80, false)]);
    let service = service(&goal_repo, &task_repo);

    let updated = service.set_achieved(OWNER, "g1", true).await.unwrap();
    assert!(updated.achieved);
    assert!(goal_repo.snapshot("g1").achieved);
}

#[tokio::test]
async fn second_mark_is_rejected_once_points_are_exhausted() {
    // Two goals at 80 each, only 80 points earned.
    let task_repo = MockTaskRepository::with_tasks(vec![task("t1", 80, true)]);
    let goal_repo =
        MockGoalRepository::with_goals(vec![goal("g1", 80, false), goal("g2", 80, false)]);
    let service = service(&goal_repo, &task_repo);

    service.set_achieved(OWNER, "g1", true).await.unwrap();

    let err = service.set_achieved(OWNER, "g2", true).await.unwrap_err();
    match err {
        Error::Goal(GoalError::InsufficientPoints {
            required,
            available,
        }) => {
            assert_eq!(required, 80);
            assert_eq!(available, 0);
        }
        other => panic!("expected InsufficientPoints, got {:?}", other),
    }
    assert!(!goal_repo.snapshot("g2").achieved);
}

#[tokio::test]
async fn unmarking_is_always_allowed() {
    // Even when earned points no longer cover the reservation.
    let task_repo = MockTaskRepository::with_tasks(vec![]);
    let goal_repo = MockGoalRepository::with_goals(vec![goal("g1", 100, true)]);
    let service = service(&goal_repo, &task_repo);

    let updated = service.set_achieved(OWNER, "g1", false).await.unwrap();
    assert!(!updated.achieved);
}

#[tokio::test]
async fn unmarked_goal_can_be_remarked_when_points_allow() {
    // Unmarking releases 100 points, so re-marking succeeds.
    let task_repo = MockTaskRepository::with_tasks(vec![task("t1", 100, true)]);
    let goal_repo = MockGoalRepository::with_goals(vec![goal("g1", 100, true)]);
    let service = service(&goal_repo, &task_repo);

    service.set_achieved(OWNER, "g1", false).await.unwrap();
    let ledger = service.get_ledger(OWNER).await.unwrap();
    assert_eq!(ledger.available_points, 100);

    let remarked = service.set_achieved(OWNER, "g1", true).await.unwrap();
    assert!(remarked.achieved);
}

#[tokio::test]
async fn marking_an_already_achieved_goal_skips_the_precondition() {
    // The goal's cost is already reserved; repeating the mark must not
    // demand the points a second time.
    let task_repo = MockTaskRepository::with_tasks(vec![task("t1", 100, true)]);
    let goal_repo = MockGoalRepository::with_goals(vec![goal("g1", 100, true)]);
    let service = service(&goal_repo, &task_repo);

    let updated = service.set_achieved(OWNER, "g1", true).await.unwrap();
    assert!(updated.achieved);
}

#[tokio::test]
async fn failed_store_write_preserves_prior_state() {
    let task_repo = MockTaskRepository::with_tasks(vec![task("t1", 100, true)]);
    let goal_repo = MockGoalRepository::failing_writes(vec![goal("g1", 80, false)]);
    let service = service(&goal_repo, &task_repo);

    let err = service.set_achieved(OWNER, "g1", true).await.unwrap_err();
    assert!(matches!(err, Error::Database(_)));
    assert!(!goal_repo.snapshot("g1").achieved);
}

#[tokio::test]
async fn goals_of_other_owners_are_invisible() {
    let task_repo = MockTaskRepository::with_tasks(vec![]);
    let goal_repo = MockGoalRepository::with_goals(vec![goal("g1", 80, false)]);
    let service = service(&goal_repo, &task_repo);

    let err = service.set_achieved("someone-else", "g1", true).await;
    assert!(matches!(
        err,
        Err(Error::Database(DatabaseError::NotFound(_)))
    ));
}

#[tokio::test]
async fn create_goal_rejects_out_of_range_requirements() {
    let task_repo = MockTaskRepository::with_tasks(vec![]);
    let goal_repo = MockGoalRepository::with_goals(vec![]);
    let service = service(&goal_repo, &task_repo);

    for points_required in [0, -5, 10_001] {
        let err = service
            .create_goal(
                OWNER,
                NewGoal {
                    id: None,
                    name: "travel fund".to_string(),
                    points_required,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
