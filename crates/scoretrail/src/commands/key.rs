use scoretrail_store::subject_key;

pub fn run(url: &str) -> anyhow::Result<()> {
    println!("{}", subject_key(url));
    Ok(())
}
