use shogi_rules::error::RulesResult;
use shogi_rules::rules::attacks::in_check;
use shogi_rules::rules::legality::{game_status, legal_moves};
use shogi_rules::scenarios;
use tracing_subscriber::EnvFilter;

fn main() -> RulesResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    for scn in scenarios::all()? {
        let moves = legal_moves(&scn.board, scn.to_move, &scn.hand)?;
        let status = game_status(&scn.board, scn.to_move, &scn.hand)?;

        println!("== {} ({} to move)", scn.name, scn.to_move);
        println!("In check: {}", in_check(&scn.board, scn.to_move));
        println!("Status: {status:?}");
        println!("Legal moves: {}", moves.len());
        for mv in &moves {
            println!("  {mv}");
        }
    }

    Ok(())
}
