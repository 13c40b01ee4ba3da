//! Login, logout, and status.

use amparo_store::DashboardStats;

use crate::context::AppContext;

pub async fn login(ctx: &mut AppContext, email: &str, password: &str) -> anyhow::Result<()> {
    if ctx.session.login(email, password).await {
        if let Some(identity) = ctx.session.identity() {
            println!("logged in as {} <{}>", identity.full_name, identity.email);
        }
        Ok(())
    } else {
        anyhow::bail!("{}", ctx.session.error().unwrap_or("login failed"))
    }
}

pub fn logout(ctx: &mut AppContext) -> anyhow::Result<()> {
    ctx.session.logout();
    println!("logged out");
    Ok(())
}

/// Identity plus the dashboard counters over freshly loaded snapshots.
pub async fn status(ctx: &mut AppContext) -> anyhow::Result<()> {
    ctx.require_session()?;
    if let Some(identity) = ctx.session.identity() {
        println!(
            "{} <{}> — {}",
            identity.full_name, identity.email, identity.role
        );
    }

    ctx.participants.fetch_all().await;
    ctx.companies.fetch_all().await;
    ctx.staff.fetch_all().await;
    ctx.placements.fetch_all().await;
    for error in [
        ctx.participants.error(),
        ctx.companies.error(),
        ctx.staff.error(),
        ctx.placements.error(),
    ]
    .into_iter()
    .flatten()
    {
        anyhow::bail!("{error}");
    }

    let stats = DashboardStats::collect(
        ctx.participants.items(),
        ctx.companies.items(),
        ctx.staff.items(),
        ctx.placements.items(),
    );
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
