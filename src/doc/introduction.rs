/*!
# Introductory Tutorial

Start the executable from a terminal. There is no banner and no
`READY.` prompt; just type. Type CTRL-D or `QUIT` to exit.

Entering a statement without a line number executes it immediately.
This is called direct mode.

<pre><code>&nbsp;> PRINT 6 * 7
&nbsp;  42
</code></pre>

Preceding a statement with a line number stores it in the program
instead. Nothing happens until the program is run.

<pre><code>&nbsp;> 10 LET X = 5
&nbsp;> 20 PRINT X
&nbsp;> 30 END
&nbsp;> RUN
&nbsp;  5
</code></pre>

Lines can be typed in any order. `LIST` shows them sorted by
line number. Typing a line number that already exists replaces
that line. Typing a line number by itself deletes it.

<pre><code>&nbsp;> 15 LET X = X + 1
&nbsp;> 30
&nbsp;> LIST
&nbsp;  10 LET X = 5
&nbsp;  15 LET X = X + 1
&nbsp;  20 PRINT X
&nbsp;> RUN
&nbsp;  6
</code></pre>

Errors are reported on a line of their own and put you back in
direct mode with the program and variables as they were at the
moment of the error.

<pre><code>&nbsp;> GOTO 99
&nbsp;  LINE NUMBER ERROR
&nbsp;> PRINT (1
&nbsp;  SYNTAX ERROR
</code></pre>

*/
