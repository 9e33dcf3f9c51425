use finite_automata::render::RenderSettings;
use finite_automata::Automaton;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let pattern = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "(a|b)*aab".to_string());
    let nfa = Automaton::from_regex(&pattern)?;
    let dfa = nfa.minimize();

    println!("pattern:        {pattern}");
    println!("nfa states:     {}", nfa.states().len());
    println!("minimal states: {}", dfa.states().len());
    println!("regex:          {:?}", dfa.generate_regex());
    println!("valid word:     {:?}", dfa.generate_valid_word());
    println!("invalid word:   {:?}", dfa.generate_invalid_word());

    nfa.render_to("nfa.dot", RenderSettings::default().with_name(&pattern))?;
    dfa.render_to("minimal.dot", RenderSettings::default())?;
    Ok(())
}
