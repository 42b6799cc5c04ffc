use leptos::prelude::*;

use crate::components::interest_graph::InterestGraph;
use crate::controllers;

/// The single page of the site. Sections are toggled by the section router
/// rather than by route changes, so everything renders up front and the
/// controllers take over after mount.
#[component]
pub fn Home() -> impl IntoView {
	// Controllers attach to the DOM rendered below, so they must run after
	// the first render. No reactive reads: this effect fires once.
	Effect::new(move |_| {
		controllers::init();
	});

	view! {
		<nav class="nav">
			<div class="nav-inner">
				<span class="nav-name">"Sam Veld"</span>
				<div class="nav-links">
					<a class="nav-link" href="#home">"Home"</a>
					<a class="nav-link" href="#projects">"Projects"</a>
					<a class="nav-link" href="#essays">"Essays"</a>
					<a class="nav-link" href="#contact">"Contact"</a>
				</div>
			</div>
		</nav>

		<main>
			<section class="section active" id="home">
				<div class="intro">
					<h1 class="intro-title">"Hi, I'm Sam."</h1>
					<p class="intro-subtitle">"Software engineer, 23"</p>
					<p class="intro-text">
						"I build software, read too many books at once, and keep "
						"half-finished electronics projects on every flat surface."
					</p>
					<div class="intro-actions">
						<a class="link-button" href="#projects">"See my work"</a>
						<a class="link-button" href="#contact">"Get in touch"</a>
					</div>
				</div>
				<div class="graph-wrap" id="networkGraph">
					<InterestGraph />
				</div>
			</section>

			<section class="section" id="projects">
				<h2>"Projects"</h2>
				<div class="project-grid">
					<article class="project-card">
						<h3>"ledgerline"</h3>
						<p>"Plain-text double-entry accounting with a terminal UI."</p>
						<a href="https://github.com/samveld/ledgerline">"Source"</a>
					</article>
					<article class="project-card">
						<h3>"brkt"</h3>
						<p>"A tiny tournament-bracket generator for board game nights."</p>
						<a href="https://github.com/samveld/brkt">"Source"</a>
					</article>
					<article class="project-card">
						<h3>"hallway-sensor"</h3>
						<p>"ESP32 presence sensing, from PCB to MQTT dashboard."</p>
					</article>
				</div>
			</section>

			<section class="section" id="essays">
				<h2>"Essays"</h2>
				<div class="essay-list">
					<article class="essay-item">
						<h3>"On keeping a reading log"</h3>
						<p>"Why writing two sentences about every book beats rating them."</p>
					</article>
					<article class="essay-item">
						<h3>"Small tools, long levers"</h3>
						<p>"The case for building the boring utility nobody will star."</p>
					</article>
				</div>
			</section>

			<section class="section" id="contact">
				<h2>"Contact"</h2>
				<p>
					"Email me at "<a href="mailto:samveld@fastmail.com">"samveld@fastmail.com"</a>
					" or find me on "<a href="https://github.com/samveld">"GitHub"</a>"."
				</p>
			</section>
		</main>
	}
}
