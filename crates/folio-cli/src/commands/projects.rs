use anyhow::Result;

use folio_core::catalog::{Project, ProjectCatalog, ProjectFilter};

pub fn run(category: Option<&str>, id: Option<u32>) -> Result<()> {
    let catalog = ProjectCatalog;

    if let Some(id) = id {
        print_details(catalog.require(id)?);
        return Ok(());
    }

    let filter = category.map(ProjectFilter::parse).unwrap_or_default();
    let projects = catalog.visible(&filter);

    if projects.is_empty() {
        println!("No projects in category \"{}\".", filter.label());
        println!("\nAvailable categories: {}", catalog.categories().join(", "));
        return Ok(());
    }

    println!("Projects ({}):\n", projects.len());

    for project in &projects {
        println!("  [{}] {} #{}", project.id, project.title, project.category);
        println!("    {}", project.tech.join(", "));
        println!("    {}", project.github);
        println!();
    }

    Ok(())
}

fn print_details(project: &Project) {
    println!("{} #{}\n", project.title, project.category);
    println!("{}\n", project.description);
    println!("Tech:   {}", project.tech.join(", "));
    println!("GitHub: {}", project.github);
    if let Some(live) = project.live {
        println!("Live:   {}", live);
    }
}
