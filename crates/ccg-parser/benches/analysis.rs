use ccg_parser::{analyze_files, analyze_source};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::path::PathBuf;

const SAMPLE_PYTHON: &str = r#"
import os
from typing import List, Optional

class UserManager:
    """Manages user accounts and authentication."""

    def __init__(self, db_url: str):
        self.db_url = db_url
        self.connection = None

    def connect(self) -> bool:
        try:
            self.connection = create_connection(self.db_url)
            return True
        except ConnectionError:
            return False

    def get_user(self, user_id: int) -> Optional[dict]:
        if not self.connection:
            raise RuntimeError("Not connected")
        return self.connection.execute("SELECT * FROM users WHERE id = ?", (user_id,))

    def list_users(self, limit: int = 100) -> List[dict]:
        return self.connection.execute("SELECT * FROM users LIMIT ?", (limit,))

    @staticmethod
    def normalize(name: str) -> str:
        return name.strip().lower()


def parse_config(path: str) -> dict:
    with open(path) as f:
        return toml.load(f)


def main():
    manager = UserManager(os.environ.get("DB_URL", "sqlite://"))
    if manager.connect():
        for user in manager.list_users():
            print(UserManager.normalize(user["name"]))
    handlers = [lambda: parse_config("a.toml")]
    handlers[0]()


if __name__ == "__main__":
    main()
"#;

fn bench_single_file(c: &mut Criterion) {
    let path = PathBuf::from("app.py");
    c.bench_function("analyze_source_python", |b| {
        b.iter(|| analyze_source(black_box(&path), black_box(SAMPLE_PYTHON)))
    });
}

fn bench_parallel_files(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths: Vec<PathBuf> = (0..50)
        .map(|i| {
            let path = dir.path().join(format!("module_{}.py", i));
            std::fs::write(&path, SAMPLE_PYTHON).expect("write sample");
            path
        })
        .collect();

    c.bench_function("analyze_files_parallel_50", |b| {
        b.iter(|| analyze_files(black_box(&paths)))
    });
}

criterion_group!(benches, bench_single_file, bench_parallel_files);
criterion_main!(benches);
