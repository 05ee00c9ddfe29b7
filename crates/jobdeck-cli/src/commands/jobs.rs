use std::sync::Arc;

use serde_json::{json, Value};

use jobdeck_core::{ApiClient, JobUpdate, JobsStore, NewJob};

use crate::cli::{JobFieldArgs, JobUpdateArgs, JobsArgs, JobsCommand};
use crate::commands::fetch_mode;
use crate::error::CliError;

pub async fn run(args: &JobsArgs, api: &Arc<ApiClient>) -> Result<Value, CliError> {
    let store = JobsStore::new(api.clone());

    match &args.command {
        JobsCommand::List { refresh } => {
            let jobs = store.list(fetch_mode(*refresh)).await?;
            Ok(serde_json::to_value(jobs)?)
        }
        JobsCommand::Show { id } => {
            let job = store.get(*id).await?;
            Ok(serde_json::to_value(job)?)
        }
        JobsCommand::Add(fields) => {
            let message = store.add(&to_new_job(fields)).await?;
            Ok(json!({ "message": message }))
        }
        JobsCommand::Update { id, fields } => {
            let update = to_job_update(fields);
            if update.is_empty() {
                return Err(CliError::Usage(String::from(
                    "provide at least one field to update",
                )));
            }
            let message = store.update(*id, &update).await?;
            Ok(json!({ "message": message }))
        }
        JobsCommand::Remove { id } => {
            let message = store.remove(*id).await?;
            Ok(json!({ "message": message }))
        }
    }
}

fn to_new_job(fields: &JobFieldArgs) -> NewJob {
    NewJob {
        title: fields.title.clone(),
        company: fields.company.clone(),
        location: fields.location.clone(),
        url: fields.url.clone(),
        description: fields.description.clone(),
        benefits: fields.benefits.clone(),
        schedule: fields.schedule.clone(),
        application_questions: fields.application_questions.clone(),
        work_authorisation: fields.work_authorisation.clone(),
        date_posted: fields.date_posted.clone(),
    }
}

fn to_job_update(fields: &JobUpdateArgs) -> JobUpdate {
    JobUpdate {
        title: fields.title.clone(),
        company: fields.company.clone(),
        location: fields.location.clone(),
        url: fields.url.clone(),
        description: fields.description.clone(),
        benefits: fields.benefits.clone(),
        schedule: fields.schedule.clone(),
        application_questions: fields.application_questions.clone(),
        work_authorisation: fields.work_authorisation.clone(),
        date_posted: fields.date_posted.clone(),
    }
}
