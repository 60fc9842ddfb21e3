// Unit tests for the JSON-file store.
//
// Each test works in its own temp directory — nothing touches the real
// data directory.

use shortlist::store::models::ResumeSort;
use shortlist::store::JsonStore;
use tempfile::tempdir;

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn initialize_seeds_empty_arrays() {
    let dir = tempdir().unwrap();
    let store = JsonStore::initialize(dir.path()).unwrap();
    assert!(store.resumes().unwrap().is_empty());
    assert!(store.recent_analyses(10).unwrap().is_empty());
}

#[test]
fn initialize_is_idempotent() {
    let dir = tempdir().unwrap();
    let store = JsonStore::initialize(dir.path()).unwrap();
    store
        .save_resume("a.pdf", "A", "text", &owned(&["python"]))
        .unwrap();

    // Re-initializing must not wipe existing data
    let store = JsonStore::initialize(dir.path()).unwrap();
    assert_eq!(store.resumes().unwrap().len(), 1);
}

#[test]
fn open_fails_without_init() {
    let dir = tempdir().unwrap();
    let result = JsonStore::open(&dir.path().join("missing"));
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("shortlist init"));
}

#[test]
fn ids_are_sequential_per_file() {
    let dir = tempdir().unwrap();
    let store = JsonStore::initialize(dir.path()).unwrap();

    assert_eq!(store.save_job("jd one", &[]).unwrap(), 1);
    assert_eq!(store.save_job("jd two", &[]).unwrap(), 2);
    // Resume ids count independently of job ids
    assert_eq!(store.save_resume("a.pdf", "A", "t", &[]).unwrap(), 1);
}

#[test]
fn saved_resume_round_trips() {
    let dir = tempdir().unwrap();
    let store = JsonStore::initialize(dir.path()).unwrap();

    let id = store
        .save_resume("jane.pdf", "Jane Doe", "Python developer", &owned(&["python"]))
        .unwrap();

    let record = store.resume(id).unwrap().expect("resume should exist");
    assert_eq!(record.filename, "jane.pdf");
    assert_eq!(record.candidate_name, "Jane Doe");
    assert_eq!(record.skills, owned(&["python"]));
    assert!(!record.created_at.is_empty());
}

#[test]
fn missing_resume_is_none() {
    let dir = tempdir().unwrap();
    let store = JsonStore::initialize(dir.path()).unwrap();
    assert!(store.resume(42).unwrap().is_none());
}

#[test]
fn recent_analyses_joins_and_limits() {
    let dir = tempdir().unwrap();
    let store = JsonStore::initialize(dir.path()).unwrap();

    let job_id = store.save_job("backend role", &owned(&["python"])).unwrap();
    for i in 0..3 {
        let resume_id = store
            .save_resume(&format!("r{i}.pdf"), &format!("R{i}"), "text", &[])
            .unwrap();
        store
            .save_analysis(job_id, resume_id, 0.5, &owned(&["python"]))
            .unwrap();
    }

    let views = store.recent_analyses(2).unwrap();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].description, "backend role");
    assert_eq!(views[0].matching_skills, owned(&["python"]));
}

#[test]
fn recent_analyses_drops_dangling_references() {
    let dir = tempdir().unwrap();
    let store = JsonStore::initialize(dir.path()).unwrap();

    let job_id = store.save_job("role", &[]).unwrap();
    let resume_id = store.save_resume("a.pdf", "A", "t", &[]).unwrap();
    store.save_analysis(job_id, resume_id, 0.9, &[]).unwrap();
    // Analysis pointing at a resume that was never saved
    store.save_analysis(job_id, resume_id + 99, 0.8, &[]).unwrap();

    let views = store.recent_analyses(10).unwrap();
    assert_eq!(views.len(), 1, "Dangling reference should be dropped");
}

#[test]
fn search_matches_name_filename_skills_and_content() {
    let dir = tempdir().unwrap();
    let store = JsonStore::initialize(dir.path()).unwrap();

    store
        .save_resume("jane.pdf", "Jane Doe", "builds services in rust", &owned(&["python"]))
        .unwrap();
    store
        .save_resume("john.docx", "John Smith", "spreadsheets all day", &owned(&["excel"]))
        .unwrap();

    let by_name = store
        .search_resumes(Some("jane"), ResumeSort::Newest)
        .unwrap();
    assert_eq!(by_name.len(), 1);

    let by_skill = store
        .search_resumes(Some("EXCEL"), ResumeSort::Newest)
        .unwrap();
    assert_eq!(by_skill.len(), 1);
    assert_eq!(by_skill[0].candidate_name, "John Smith");

    let by_content = store
        .search_resumes(Some("rust"), ResumeSort::Newest)
        .unwrap();
    assert_eq!(by_content.len(), 1);

    let none = store
        .search_resumes(Some("haskell"), ResumeSort::Newest)
        .unwrap();
    assert!(none.is_empty());
}

#[test]
fn sort_orders_by_name() {
    let dir = tempdir().unwrap();
    let store = JsonStore::initialize(dir.path()).unwrap();

    store.save_resume("b.pdf", "beta", "t", &[]).unwrap();
    store.save_resume("a.pdf", "Alpha", "t", &[]).unwrap();

    let asc = store.search_resumes(None, ResumeSort::NameAsc).unwrap();
    assert_eq!(asc[0].candidate_name, "Alpha");

    let desc = store.search_resumes(None, ResumeSort::NameDesc).unwrap();
    assert_eq!(desc[0].candidate_name, "beta");
}

#[test]
fn latest_job_analyses_ranks_by_score() {
    let dir = tempdir().unwrap();
    let store = JsonStore::initialize(dir.path()).unwrap();

    // Older job with its own analysis — must not leak into the latest view
    let old_job = store.save_job("old role", &[]).unwrap();
    let old_resume = store.save_resume("old.pdf", "Old", "t", &[]).unwrap();
    store.save_analysis(old_job, old_resume, 0.99, &[]).unwrap();

    let job_id = store.save_job("new role", &owned(&["python"])).unwrap();
    let low = store.save_resume("low.pdf", "Low", "t", &[]).unwrap();
    let high = store.save_resume("high.pdf", "High", "t", &[]).unwrap();
    store.save_analysis(job_id, low, 0.3, &[]).unwrap();
    store.save_analysis(job_id, high, 0.8, &[]).unwrap();

    let (job, views) = store
        .latest_job_analyses()
        .unwrap()
        .expect("latest job should exist");
    assert_eq!(job.description, "new role");
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].filename, "high.pdf");
    assert_eq!(views[1].filename, "low.pdf");
}

#[test]
fn latest_job_analyses_empty_store() {
    let dir = tempdir().unwrap();
    let store = JsonStore::initialize(dir.path()).unwrap();
    assert!(store.latest_job_analyses().unwrap().is_none());
}
